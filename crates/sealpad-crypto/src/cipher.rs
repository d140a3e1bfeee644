//! AES-256-GCM authenticated encryption.

use aes_gcm::aead::Aead;
use aes_gcm::{Aes256Gcm, Key, KeyInit, Nonce};

use crate::error::CryptoError;
use crate::types::{IV_LENGTH, KEY_LENGTH, TAG_LENGTH};

/// An AEAD primitive keyed per call.
///
/// IV uniqueness per (key, encryption) pair is the caller's obligation;
/// `encrypt` is deterministic given (key, iv, plaintext). Implementations
/// retain no key material between calls.
pub trait AeadCipher {
    /// Encrypt `plaintext`, returning ciphertext with the 16-byte
    /// authentication tag appended.
    fn encrypt(
        &self,
        key: &[u8; KEY_LENGTH],
        iv: &[u8; IV_LENGTH],
        plaintext: &[u8],
    ) -> Result<Vec<u8>, CryptoError>;

    /// Verify the tag and decrypt. On mismatch returns
    /// [`CryptoError::DecryptionFailed`] and no plaintext bytes.
    fn decrypt(
        &self,
        key: &[u8; KEY_LENGTH],
        iv: &[u8; IV_LENGTH],
        ciphertext: &[u8],
    ) -> Result<Vec<u8>, CryptoError>;
}

/// AES-256-GCM with a 128-bit tag and no associated data.
#[derive(Debug, Clone, Copy, Default)]
pub struct Aes256GcmCipher;

impl AeadCipher for Aes256GcmCipher {
    fn encrypt(
        &self,
        key: &[u8; KEY_LENGTH],
        iv: &[u8; IV_LENGTH],
        plaintext: &[u8],
    ) -> Result<Vec<u8>, CryptoError> {
        let cipher = Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(key));
        let nonce = Nonce::from_slice(iv);
        // Only fails for plaintexts beyond the GCM length limit.
        cipher
            .encrypt(nonce, plaintext)
            .map_err(|_| CryptoError::InvalidParameter("plaintext exceeds AES-GCM length limit"))
    }

    fn decrypt(
        &self,
        key: &[u8; KEY_LENGTH],
        iv: &[u8; IV_LENGTH],
        ciphertext: &[u8],
    ) -> Result<Vec<u8>, CryptoError> {
        if ciphertext.len() < TAG_LENGTH {
            return Err(CryptoError::DecryptionFailed);
        }
        let cipher = Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(key));
        let nonce = Nonce::from_slice(iv);
        cipher
            .decrypt(nonce, ciphertext)
            .map_err(|_| CryptoError::DecryptionFailed)
    }
}
