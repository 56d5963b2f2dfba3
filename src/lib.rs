//! One-time, time-boxed token exchange between a session issuer and a token
//! presenter, bound together by an HMAC-SHA256 proof over
//! `sessionID:timestamp`.

pub mod clock;
pub mod config;
pub mod error;

pub mod crypto {
    pub mod random;
    pub mod token;
}

pub mod models {
    pub mod payload;
    pub mod session;
    pub mod verdict;
}

pub mod services {
    pub mod issuer;
    pub mod presenter;
}

pub mod handlers {
    pub mod issuer;
    pub mod presenter;
}

pub mod validation {
    pub mod payload;
}

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Installs the stderr log subscriber, filtered by `RUST_LOG` (default `info`).
///
/// Stdout is left to the payload and verdict output.
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
