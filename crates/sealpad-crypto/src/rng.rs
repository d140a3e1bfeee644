//! Random byte source for salts and IVs.
//!
//! The orchestrator depends on this trait rather than on `getrandom`
//! directly, so tests can inject a deterministic source and alternative
//! CSPRNG backends can be substituted without touching orchestration.

use crate::error::CryptoError;
use crate::types::{IV_LENGTH, SALT_LENGTH};

/// A source of cryptographically secure random bytes.
pub trait RandomSource {
    /// Fill `buf` with random bytes.
    fn fill(&self, buf: &mut [u8]) -> Result<(), CryptoError>;

    /// Generate a fresh 16-byte PBKDF2 salt.
    fn generate_salt(&self) -> Result<[u8; SALT_LENGTH], CryptoError> {
        let mut salt = [0u8; SALT_LENGTH];
        self.fill(&mut salt)?;
        Ok(salt)
    }

    /// Generate a fresh 12-byte AES-GCM IV.
    fn generate_iv(&self) -> Result<[u8; IV_LENGTH], CryptoError> {
        let mut iv = [0u8; IV_LENGTH];
        self.fill(&mut iv)?;
        Ok(iv)
    }
}

/// The platform CSPRNG (`getrandom`; Web Crypto on wasm targets).
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRandom;

impl RandomSource for SystemRandom {
    fn fill(&self, buf: &mut [u8]) -> Result<(), CryptoError> {
        getrandom::getrandom(buf).map_err(|e| CryptoError::RngFailed(e.to_string()))
    }
}
