//! PBKDF2-HMAC-SHA-256 key derivation (RFC 8018).

use pbkdf2::pbkdf2_hmac;
use sha2::Sha256;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::CryptoError;
use crate::types::{KEY_LENGTH, SALT_LENGTH};

/// A 256-bit symmetric key derived from a passphrase.
///
/// Zeroed on drop; `Debug` never prints the key bytes.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct DerivedKey([u8; KEY_LENGTH]);

impl DerivedKey {
    pub fn from_bytes(bytes: [u8; KEY_LENGTH]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; KEY_LENGTH] {
        &self.0
    }
}

impl std::fmt::Debug for DerivedKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("DerivedKey([redacted])")
    }
}

/// Derive a 256-bit key from a passphrase using PBKDF2-HMAC-SHA-256.
///
/// Pure and deterministic: identical inputs always yield an identical key.
/// Computation time scales linearly with `iterations`.
///
/// # Arguments
/// * `passphrase` - Passphrase bytes (emptiness is the caller's policy)
/// * `salt` - Exactly 16 bytes
/// * `iterations` - PBKDF2 iteration count, must be positive
pub fn derive_key(
    passphrase: &[u8],
    salt: &[u8],
    iterations: u32,
) -> Result<DerivedKey, CryptoError> {
    if salt.len() != SALT_LENGTH {
        return Err(CryptoError::InvalidParameter("salt must be 16 bytes"));
    }
    if iterations == 0 {
        return Err(CryptoError::InvalidParameter(
            "iterations must be a positive integer",
        ));
    }

    let mut key = [0u8; KEY_LENGTH];
    pbkdf2_hmac::<Sha256>(passphrase, salt, iterations, &mut key);
    Ok(DerivedKey(key))
}
