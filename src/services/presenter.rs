use crate::clock::Clock;
use crate::models::payload::TokenPayload;

/// A finite, lazy series of payloads, one per simulated second.
///
/// Payload `i` (0-indexed) is stamped `clock.now() + i`, with the clock read
/// when that payload is produced.
pub struct TokenSeries<'a, C: Clock> {
    secret: &'a [u8],
    session_id: &'a str,
    clock: C,
    count: u32,
    next: u32,
}

impl<C: Clock> Iterator for TokenSeries<'_, C> {
    type Item = TokenPayload;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.count {
            return None;
        }

        let offset = i64::from(self.next);
        self.next += 1;

        let timestamp = self.clock.now().saturating_add(offset);
        let payload = TokenPayload::sign(self.secret, self.session_id, timestamp);
        tracing::debug!("🔑 Generated token {} at timestamp {}", self.next, timestamp);
        Some(payload)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.count - self.next) as usize;
        (remaining, Some(remaining))
    }
}

impl<C: Clock> ExactSizeIterator for TokenSeries<'_, C> {}

/// Creates the series of `count` payloads for a session.
///
/// # Arguments
///
/// * `secret` - The shared session secret.
/// * `session_id` - The session ID.
/// * `count` - How many payloads to produce.
/// * `clock` - The wall clock.
///
/// # Returns
///
/// A `TokenSeries` iterator.
pub fn generate_series<'a, C: Clock>(
    secret: &'a [u8],
    session_id: &'a str,
    count: u32,
    clock: C,
) -> TokenSeries<'a, C> {
    TokenSeries {
        secret,
        session_id,
        clock,
        count,
        next: 0,
    }
}
