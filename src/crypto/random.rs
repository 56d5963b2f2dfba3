use crate::error::{AppError, Result};
use rand::RngCore;
use rand::rngs::OsRng;

/// A cryptographically secure source of random bytes.
pub trait SecureRandom {
    /// Fills `buf` entirely with random bytes.
    fn fill_random(&mut self, buf: &mut [u8]) -> Result<()>;
}

/// Random bytes from the operating system.
#[derive(Clone, Copy, Debug, Default)]
pub struct OsEntropy;

impl SecureRandom for OsEntropy {
    fn fill_random(&mut self, buf: &mut [u8]) -> Result<()> {
        OsRng
            .try_fill_bytes(buf)
            .map_err(|e| AppError::EntropyUnavailable(e.to_string()))
    }
}

/// Generates `N` random bytes from `rng`.
pub fn random_bytes<const N: usize, R: SecureRandom + ?Sized>(rng: &mut R) -> Result<[u8; N]> {
    let mut bytes = [0u8; N];
    rng.fill_random(&mut bytes)?;
    Ok(bytes)
}
