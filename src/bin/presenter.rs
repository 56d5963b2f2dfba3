use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;

use qrpass::clock::SystemClock;
use qrpass::config::Config;
use qrpass::handlers;

#[derive(Parser)]
#[command(name = "qrpass-presenter")]
#[command(about = "Generate time-stamped tokens for a session obtained out of band", long_about = None)]
struct Cli {
    /// Session ID printed by the issuer
    #[arg(short, long)]
    session: String,

    /// Secret printed by the issuer, in hex
    #[arg(long)]
    secret: String,

    /// Number of tokens to generate (default: QRPASS_TOKEN_COUNT or 10)
    #[arg(short, long)]
    count: Option<u32>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<ExitCode> {
    dotenvy::dotenv().ok();
    qrpass::init_tracing();

    let cli = Cli::parse();
    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::debug!("✅ Configuration loaded successfully");

    let count = cli.count.unwrap_or(config.token_count);
    let mut stdout = tokio::io::stdout();

    match handlers::presenter::run(
        &cli.session,
        cli.secret,
        count,
        config.present_interval,
        SystemClock,
        &mut stdout,
    )
    .await
    {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(e) => {
            println!("{}", e);
            Ok(ExitCode::from(e.exit_code()))
        }
    }
}
