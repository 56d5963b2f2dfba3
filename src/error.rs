use thiserror::Error;

/// The application's error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// The secure random source could not supply bytes.
    #[error("Secure random source unavailable: {0}")]
    EntropyUnavailable(String),

    /// The presented line did not split into exactly three fields.
    #[error("Invalid input format. Expected sessionID,timestamp,token (got {fields} fields)")]
    MalformedPayload {
        /// The number of comma-separated fields found.
        fields: usize,
    },

    /// The session was already used for a verification attempt.
    #[error("Session already consumed")]
    SessionConsumed,

    /// The shared secret could not be decoded or is empty.
    #[error("Invalid secret: {0}")]
    InvalidSecret(String),

    /// The session identifier cannot be used in a payload.
    #[error("Invalid session ID: {0}")]
    InvalidSessionId(String),

    /// No line could be read from the input source.
    #[error("Error reading input: {0}")]
    Input(String),

    /// An I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A `Result` type that uses `AppError` as the error type.
pub type Result<T> = std::result::Result<T, AppError>;

impl AppError {
    /// Returns the process exit code reported for this error.
    ///
    /// Codes 1-4 belong to verification verdicts, so errors start at 10.
    pub fn exit_code(&self) -> u8 {
        match self {
            AppError::EntropyUnavailable(msg) => {
                tracing::error!("Entropy unavailable: {}", msg);
                10
            }

            AppError::MalformedPayload { fields } => {
                tracing::warn!("Malformed payload with {} fields", fields);
                11
            }

            AppError::SessionConsumed => {
                tracing::warn!("Presentation against a consumed session");
                12
            }

            AppError::InvalidSecret(msg) => {
                tracing::debug!("Invalid secret: {}", msg);
                13
            }

            AppError::InvalidSessionId(msg) => {
                tracing::debug!("Invalid session ID: {}", msg);
                14
            }

            AppError::Input(msg) => {
                tracing::error!("Input error: {}", msg);
                15
            }

            AppError::Io(e) => {
                tracing::error!("IO error: {}", e);
                16
            }
        }
    }
}
