use crate::clock::Timestamp;
use crate::crypto::random::{self, SecureRandom};
use crate::crypto::token;
use crate::error::{AppError, Result};
use crate::models::payload::TokenPayload;
use crate::models::session::{SECRET_SIZE, SESSION_ID_SIZE, Session};
use crate::models::verdict::Verdict;
use crate::validation::payload::parse_payload;

/// The maximum distance in seconds between a payload timestamp and now.
///
/// Inclusive: a difference of exactly this many seconds is accepted.
pub const ACCEPTANCE_WINDOW_SECS: u64 = 10;

/// Creates a new session with a random ID and secret.
///
/// # Arguments
///
/// * `rng` - The secure random source.
///
/// # Returns
///
/// A `Result` containing the new `Session`, or `EntropyUnavailable`.
pub fn create_session<R: SecureRandom + ?Sized>(rng: &mut R) -> Result<Session> {
    let session_id = random::random_bytes::<SESSION_ID_SIZE, R>(rng)?;
    let secret = random::random_bytes::<SECRET_SIZE, R>(rng)?;
    let session = Session::new(hex::encode(session_id), secret);

    tracing::info!(
        "✅ Session created: {} at {}",
        session.session_id(),
        session.created_at().to_rfc3339()
    );
    Ok(session)
}

/// Trims and parses one presented input line.
pub fn receive_payload(line: &str) -> Result<TokenPayload> {
    parse_payload(line.trim())
}

/// Verifies a payload against the session, consuming the session.
///
/// The session is dropped, and its secret wiped, when this returns, whatever
/// the verdict.
///
/// # Arguments
///
/// * `session` - The live session. Moved in and destroyed.
/// * `payload` - The presented payload.
/// * `now` - The issuer's current time in epoch seconds.
///
/// # Returns
///
/// The `Verdict` for this single attempt.
pub fn verify(session: Session, payload: &TokenPayload, now: Timestamp) -> Verdict {
    let verdict = check(&session, payload, now);

    if verdict.is_valid() {
        tracing::info!("✅ Token accepted for session {}", session.session_id());
    } else {
        tracing::warn!(
            "❌ Token rejected for session {}: {:?}",
            session.session_id(),
            verdict
        );
    }

    tracing::debug!("🧹 Session {} destroyed", session.session_id());
    verdict
}

fn check(session: &Session, payload: &TokenPayload, now: Timestamp) -> Verdict {
    if payload.session_id != session.session_id() {
        return Verdict::SessionMismatch;
    }

    let timestamp: Timestamp = match payload.timestamp.parse() {
        Ok(ts) => ts,
        Err(_) => return Verdict::InvalidTimestamp,
    };

    if now.abs_diff(timestamp) > ACCEPTANCE_WINDOW_SECS {
        return Verdict::WindowExceeded;
    }

    let expected = token::derive_hex(session.secret(), session.session_id(), &payload.timestamp);
    if token::tokens_match(&payload.token, &expected) {
        Verdict::Valid
    } else {
        Verdict::InvalidToken
    }
}

/// Holds the one session of an issuer run until it is presented against.
#[derive(Debug)]
pub struct Issuer {
    session: Option<Session>,
}

impl Issuer {
    /// Wraps an existing session.
    pub fn new(session: Session) -> Self {
        Self {
            session: Some(session),
        }
    }

    /// Creates a fresh session from `rng` and wraps it.
    pub fn start<R: SecureRandom + ?Sized>(rng: &mut R) -> Result<Self> {
        Ok(Self::new(create_session(rng)?))
    }

    /// Returns the live session, or `None` once it has been consumed.
    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// Returns `true` once a presentation has been attempted.
    pub fn is_consumed(&self) -> bool {
        self.session.is_none()
    }

    /// Presents one input line against the session.
    ///
    /// The session is taken out before the line is even parsed, so it is gone
    /// after this call on every path, including `MalformedPayload`.
    ///
    /// # Arguments
    ///
    /// * `line` - The raw input line.
    /// * `now` - The issuer's current time in epoch seconds.
    ///
    /// # Returns
    ///
    /// A `Result` containing the `Verdict`, `MalformedPayload` for a bad line,
    /// or `SessionConsumed` if the session was already used.
    pub fn present(&mut self, line: &str, now: Timestamp) -> Result<Verdict> {
        let session = self.session.take().ok_or(AppError::SessionConsumed)?;
        let payload = receive_payload(line)?;
        Ok(verify(session, &payload, now))
    }
}
