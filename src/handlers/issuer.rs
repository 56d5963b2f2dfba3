use std::time::Duration;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use zeroize::Zeroizing;

use crate::clock::Clock;
use crate::crypto::random::SecureRandom;
use crate::error::{AppError, Result};
use crate::models::verdict::Verdict;
use crate::services::issuer::Issuer;

/// Runs one issuer session: bootstrap, a single presentation, the verdict.
///
/// # Arguments
///
/// * `rng` - The secure random source for the session.
/// * `clock` - The wall clock, read once the line has arrived.
/// * `input` - The line source. Exactly one line is consumed.
/// * `output` - The display sink.
/// * `timeout` - How long to wait for the line, if bounded.
///
/// # Returns
///
/// A `Result` containing the `Verdict` that was displayed.
pub async fn run<R, C, I, O>(
    rng: &mut R,
    clock: &C,
    mut input: I,
    output: &mut O,
    timeout: Option<Duration>,
) -> Result<Verdict>
where
    R: SecureRandom + ?Sized,
    C: Clock,
    I: AsyncBufRead + Unpin,
    O: AsyncWrite + Unpin,
{
    let mut issuer = Issuer::start(rng)?;

    if let Some(session) = issuer.session() {
        let secret_hex = session.secret_hex();
        let banner = Zeroizing::new(format!(
            "Session generated. Seed sent to third party:\n\
             Session ID: {}\n\
             Secret: {}\n\
             Waiting for QR code input (format: sessionID,timestamp,token):\n",
            session.session_id(),
            secret_hex.as_str(),
        ));
        output.write_all(banner.as_bytes()).await?;
        output.flush().await?;
    }

    let line = read_line(&mut input, timeout).await?;
    let verdict = issuer.present(&line, clock.now())?;

    output
        .write_all(format!("{}\n", verdict.message()).as_bytes())
        .await?;
    output.flush().await?;

    Ok(verdict)
}

async fn read_line<I>(input: &mut I, timeout: Option<Duration>) -> Result<String>
where
    I: AsyncBufRead + Unpin,
{
    let mut line = String::new();
    let read = match timeout {
        Some(limit) => tokio::time::timeout(limit, input.read_line(&mut line))
            .await
            .map_err(|_| {
                AppError::Input(format!("no input within {} seconds", limit.as_secs()))
            })?,
        None => input.read_line(&mut line).await,
    };

    // A payload only counts once its terminating newline has arrived.
    match read {
        Ok(_) if !line.ends_with('\n') => {
            Err(AppError::Input("unexpected end of input".to_string()))
        }
        Ok(_) => Ok(line),
        Err(e) => Err(AppError::Input(e.to_string())),
    }
}
