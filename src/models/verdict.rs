use std::fmt;

/// The outcome of the single verification a session allows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// The token is authentic and fresh.
    Valid,
    /// The payload names a different session.
    SessionMismatch,
    /// The timestamp field is not a base-10 integer.
    InvalidTimestamp,
    /// The timestamp is outside the acceptance window.
    WindowExceeded,
    /// The token does not match the expected tag.
    InvalidToken,
}

impl Verdict {
    /// Returns `true` only for [`Verdict::Valid`].
    pub fn is_valid(self) -> bool {
        self == Verdict::Valid
    }

    /// The human-readable status line for this verdict.
    pub fn message(self) -> &'static str {
        match self {
            Verdict::Valid => "Valid token!",
            Verdict::SessionMismatch => "Session ID does not match.",
            Verdict::InvalidTimestamp => "Invalid timestamp.",
            Verdict::WindowExceeded => "Timestamp is not within the valid 10-second window.",
            Verdict::InvalidToken => "Invalid token!",
        }
    }

    /// The process exit code reported for this verdict.
    pub fn exit_code(self) -> u8 {
        match self {
            Verdict::Valid => 0,
            Verdict::SessionMismatch => 1,
            Verdict::InvalidTimestamp => 2,
            Verdict::WindowExceeded => 3,
            Verdict::InvalidToken => 4,
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}
