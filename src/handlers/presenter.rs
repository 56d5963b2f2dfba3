use std::time::Duration;
use tokio::io::{AsyncWrite, AsyncWriteExt};

use crate::clock::Clock;
use crate::error::Result;
use crate::services::presenter::generate_series;
use crate::validation::payload::{decode_secret, validate_session_id};

/// Emits `count` payloads for a session obtained out of band.
///
/// # Arguments
///
/// * `session_id` - The session ID.
/// * `secret_hex` - The hex secret. Wiped once decoded.
/// * `count` - How many payloads to emit.
/// * `interval` - Delay between two payloads. Zero disables pacing.
/// * `clock` - The wall clock.
/// * `output` - The display sink.
///
/// # Returns
///
/// A `Result<()>`.
pub async fn run<C, O>(
    session_id: &str,
    secret_hex: String,
    count: u32,
    interval: Duration,
    clock: C,
    output: &mut O,
) -> Result<()>
where
    C: Clock,
    O: AsyncWrite + Unpin,
{
    validate_session_id(session_id)?;
    let secret = decode_secret(secret_hex)?;

    output
        .write_all(format!("Generating {} QR code tokens (one per second):\n", count).as_bytes())
        .await?;

    for (i, payload) in generate_series(&secret, session_id, count, clock).enumerate() {
        output
            .write_all(format!("Iteration {}: {}\n", i + 1, payload).as_bytes())
            .await?;
        output.flush().await?;

        // The next payload reads the clock only after the pause.
        if i + 1 < count as usize && !interval.is_zero() {
            tokio::time::sleep(interval).await;
        }
    }

    tracing::info!("✅ Emitted {} tokens for session {}", count, session_id);
    Ok(())
}
