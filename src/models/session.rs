use chrono::{DateTime, Utc};
use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// The size of the raw session ID in bytes (hex-encoded to 32 characters).
pub const SESSION_ID_SIZE: usize = 16;
/// The size of the session secret in bytes.
pub const SECRET_SIZE: usize = 32;

/// A live single-use session owned by one issuer run.
///
/// ⚠️ There is no `Clone`: a session is moved into the one verification it
/// allows and is wiped when dropped.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct Session {
    /// The lowercase hex session ID.
    session_id: String,
    /// The shared secret. Never part of a payload.
    secret: [u8; SECRET_SIZE],
    /// The timestamp when the session was created.
    #[zeroize(skip)]
    created_at: DateTime<Utc>,
}

impl Session {
    /// Creates a session from an identifier and secret.
    ///
    /// The identifier must not contain `,` or `:`; generated IDs are hex.
    pub fn new(session_id: String, secret: [u8; SECRET_SIZE]) -> Self {
        Self {
            session_id,
            secret,
            created_at: Utc::now(),
        }
    }

    /// Returns the hex session ID.
    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    /// Returns the shared secret.
    pub fn secret(&self) -> &[u8] {
        &self.secret
    }

    /// Returns the secret as lowercase hex, for out-of-band transfer.
    pub fn secret_hex(&self) -> zeroize::Zeroizing<String> {
        zeroize::Zeroizing::new(hex::encode(self.secret))
    }

    /// Returns when the session was created.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("session_id", &self.session_id)
            .field("secret", &"<redacted>")
            .field("created_at", &self.created_at)
            .finish()
    }
}
