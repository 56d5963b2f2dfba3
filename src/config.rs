use std::env;
use std::time::Duration;
use anyhow::{Context, Result};

/// The default number of tokens a presenter emits.
pub const DEFAULT_TOKEN_COUNT: u32 = 10;

/// The application's configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// The number of tokens a presenter emits.
    pub token_count: u32,
    /// The delay between two emitted tokens. Zero disables pacing.
    pub present_interval: Duration,
    /// How long the issuer waits for its single input line, if bounded.
    pub input_timeout: Option<Duration>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            token_count: DEFAULT_TOKEN_COUNT,
            present_interval: Duration::ZERO,
            input_timeout: None,
        }
    }
}

impl Config {
    /// Creates a new `Config` from environment variables.
    ///
    /// # Returns
    ///
    /// A `Result` containing the `Config`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Creates a new `Config` from any key/value lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let token_count = lookup("QRPASS_TOKEN_COUNT")
            .unwrap_or_else(|| DEFAULT_TOKEN_COUNT.to_string())
            .parse()
            .context("Invalid QRPASS_TOKEN_COUNT")?;

        let interval_ms: u64 = lookup("QRPASS_PRESENT_INTERVAL_MS")
            .unwrap_or_else(|| "0".to_string())
            .parse()
            .context("Invalid QRPASS_PRESENT_INTERVAL_MS")?;

        let input_timeout = match lookup("QRPASS_INPUT_TIMEOUT_SECS") {
            Some(secs) => {
                let secs: u64 = secs
                    .parse()
                    .context("Invalid QRPASS_INPUT_TIMEOUT_SECS")?;
                Some(Duration::from_secs(secs))
            }
            None => None,
        };

        Ok(Self {
            token_count,
            present_interval: Duration::from_millis(interval_ms),
            input_timeout,
        })
    }
}
