use std::process::ExitCode;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use tokio::io::BufReader;

use qrpass::clock::SystemClock;
use qrpass::config::Config;
use qrpass::crypto::random::OsEntropy;
use qrpass::handlers;

#[derive(Parser)]
#[command(name = "qrpass-issuer")]
#[command(about = "Issue a single-use session and verify one presented token", long_about = None)]
struct Cli {
    /// Give up waiting for input after this many seconds (default: wait forever)
    #[arg(long = "timeout-secs")]
    timeout_secs: Option<u64>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<ExitCode> {
    dotenvy::dotenv().ok();
    qrpass::init_tracing();

    let cli = Cli::parse();
    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::debug!("✅ Configuration loaded successfully");

    let timeout = cli.timeout_secs.map(Duration::from_secs).or(config.input_timeout);

    let mut stdout = tokio::io::stdout();
    let stdin = BufReader::new(tokio::io::stdin());

    match handlers::issuer::run(&mut OsEntropy, &SystemClock, stdin, &mut stdout, timeout).await {
        Ok(verdict) => Ok(ExitCode::from(verdict.exit_code())),
        Err(e) => {
            println!("{}", e);
            Ok(ExitCode::from(e.exit_code()))
        }
    }
}
