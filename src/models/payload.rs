use std::fmt;

use crate::clock::Timestamp;
use crate::crypto::token;

/// The delimiter between payload fields on the wire.
pub const FIELD_DELIMITER: char = ',';

/// A `sessionID,timestamp,token` record exchanged out of band.
///
/// The timestamp is kept as the exact transmitted string: the issuer re-derives
/// the tag from it without normalising.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenPayload {
    /// The session ID the token was derived for.
    pub session_id: String,
    /// Decimal Unix epoch seconds.
    pub timestamp: String,
    /// Lowercase hex authentication tag.
    pub token: String,
}

impl TokenPayload {
    /// Builds the payload proving possession of `secret` at `timestamp`.
    pub fn sign(secret: &[u8], session_id: &str, timestamp: Timestamp) -> Self {
        let timestamp = timestamp.to_string();
        let token = token::derive_hex(secret, session_id, &timestamp);

        Self {
            session_id: session_id.to_string(),
            timestamp,
            token,
        }
    }
}

impl fmt::Display for TokenPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}{}{}",
            self.session_id, FIELD_DELIMITER, self.timestamp, FIELD_DELIMITER, self.token
        )
    }
}
