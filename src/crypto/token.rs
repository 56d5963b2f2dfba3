use hmac::digest::{Key, KeyInit};
use hmac::{Hmac, Mac};
use sha2::Sha256;
use subtle::ConstantTimeEq;
use zeroize::Zeroizing;

type HmacSha256 = Hmac<Sha256>;

/// The size of an authentication tag in bytes.
pub const TAG_SIZE: usize = 32;

/// The SHA-256 block size, which is also the HMAC key block size.
const BLOCK_SIZE: usize = 64;

/// Separator between the session ID and the timestamp in the signed message.
const MESSAGE_SEPARATOR: &[u8] = b":";

/// Derives the authentication tag for a session ID and timestamp.
///
/// The signed message is `"{session_id}:{timestamp}"`, keyed with `secret`
/// under HMAC-SHA256. Both sides of the exchange depend on this exact layout.
///
/// # Arguments
///
/// * `secret` - The shared session secret.
/// * `session_id` - The session identifier.
/// * `timestamp` - The decimal epoch-second string, exactly as transmitted.
///
/// # Returns
///
/// The raw 32-byte tag.
pub fn derive(secret: &[u8], session_id: &str, timestamp: &str) -> [u8; TAG_SIZE] {
    let block = key_block(secret);
    let mut mac = <HmacSha256 as KeyInit>::new(Key::<HmacSha256>::from_slice(block.as_slice()));
    mac.update(session_id.as_bytes());
    mac.update(MESSAGE_SEPARATOR);
    mac.update(timestamp.as_bytes());

    let mut tag = [0u8; TAG_SIZE];
    tag.copy_from_slice(&mac.finalize().into_bytes());
    tag
}

/// Normalises a key of any length to one HMAC key block.
///
/// Keys longer than a block are hashed first, shorter ones are zero-padded.
fn key_block(secret: &[u8]) -> Zeroizing<[u8; BLOCK_SIZE]> {
    let mut block = Zeroizing::new([0u8; BLOCK_SIZE]);
    if secret.len() > BLOCK_SIZE {
        let digest = <Sha256 as sha2::Digest>::digest(secret);
        block[..digest.len()].copy_from_slice(&digest);
    } else {
        block[..secret.len()].copy_from_slice(secret);
    }
    block
}

/// Derives the tag and renders it as lowercase hexadecimal for transport.
pub fn derive_hex(secret: &[u8], session_id: &str, timestamp: &str) -> String {
    hex::encode(derive(secret, session_id, timestamp))
}

/// Compares a presented hex token against the expected one in constant time.
///
/// Tokens of different lengths never match.
pub fn tokens_match(presented: &str, expected: &str) -> bool {
    presented.as_bytes().ct_eq(expected.as_bytes()).into()
}
