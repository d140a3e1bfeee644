//! Passphrase encryption orchestrator.
//!
//! Composes the random source, KDF, AEAD cipher, and envelope codec into the
//! two public operations. Both are synchronous and stateless between calls;
//! the PBKDF2 step is CPU-bound (tens to low-hundreds of milliseconds at the
//! default iteration count), so responsiveness-sensitive callers should run
//! them off the hot thread.

use crate::cipher::{AeadCipher, Aes256GcmCipher};
use crate::envelope::{decode_envelope, encode_envelope, Envelope, KdfParams};
use crate::error::{CryptoError, FormatError};
use crate::kdf::derive_key;
use crate::rng::{RandomSource, SystemRandom};
use crate::types::{DEFAULT_ITERATIONS, ENVELOPE_FORMAT, MAX_DECRYPT_ITERATIONS};

/// Passphrase-based envelope encryption over pluggable RNG and AEAD backends.
///
/// Encrypt generates a fresh salt and IV per call, so two encryptions of the
/// same plaintext under the same passphrase never share an envelope. Decrypt
/// re-derives the key from the envelope's own salt and iteration count.
pub struct PassphraseEncryptor<R = SystemRandom, C = Aes256GcmCipher> {
    rng: R,
    cipher: C,
    iterations: u32,
    max_iterations: u32,
}

impl PassphraseEncryptor {
    /// Encryptor with the platform CSPRNG, AES-256-GCM, and the default
    /// iteration count.
    pub fn new() -> Self {
        Self::with_backend(SystemRandom, Aes256GcmCipher)
    }

    /// Encryptor with a non-default PBKDF2 iteration count for encryption.
    pub fn with_iterations(iterations: u32) -> Self {
        Self::new().iterations(iterations)
    }
}

impl Default for PassphraseEncryptor {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RandomSource, C: AeadCipher> PassphraseEncryptor<R, C> {
    /// Encryptor over explicit RNG and AEAD backends.
    pub fn with_backend(rng: R, cipher: C) -> Self {
        Self {
            rng,
            cipher,
            iterations: DEFAULT_ITERATIONS,
            max_iterations: MAX_DECRYPT_ITERATIONS,
        }
    }

    /// Set the PBKDF2 iteration count used for encryption.
    pub fn iterations(mut self, iterations: u32) -> Self {
        self.iterations = iterations;
        self
    }

    /// Set the ceiling on iteration counts accepted from envelopes at
    /// decrypt time.
    pub fn max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Encrypt text under a passphrase, returning envelope text.
    pub fn encrypt(&self, plaintext: &str, passphrase: &str) -> Result<String, CryptoError> {
        self.encrypt_bytes(plaintext.as_bytes(), passphrase)
    }

    /// Encrypt bytes under a passphrase, returning envelope text.
    pub fn encrypt_bytes(&self, plaintext: &[u8], passphrase: &str) -> Result<String, CryptoError> {
        if passphrase.is_empty() {
            return Err(CryptoError::InvalidInput("passphrase must not be empty"));
        }
        if plaintext.is_empty() {
            return Err(CryptoError::InvalidInput("plaintext must not be empty"));
        }

        let salt = self.rng.generate_salt()?;
        let iv = self.rng.generate_iv()?;
        let key = derive_key(passphrase.as_bytes(), &salt, self.iterations)?;
        let ciphertext = self.cipher.encrypt(key.as_bytes(), &iv, plaintext)?;

        let envelope = Envelope {
            format: ENVELOPE_FORMAT.to_string(),
            kdf: KdfParams::pbkdf2_sha256(self.iterations),
            salt,
            iv,
            ciphertext,
        };
        Ok(encode_envelope(&envelope))
    }

    /// Decrypt envelope text, requiring the plaintext to be UTF-8.
    pub fn decrypt(&self, envelope_text: &str, passphrase: &str) -> Result<String, CryptoError> {
        let plaintext = self.decrypt_bytes(envelope_text, passphrase)?;
        String::from_utf8(plaintext).map_err(|_| CryptoError::InvalidUtf8)
    }

    /// Decrypt envelope text to raw bytes.
    ///
    /// Wrong passphrase and tampered salt/IV/ciphertext are
    /// indistinguishable: all surface as [`CryptoError::DecryptionFailed`].
    pub fn decrypt_bytes(
        &self,
        envelope_text: &str,
        passphrase: &str,
    ) -> Result<Vec<u8>, CryptoError> {
        let envelope = decode_envelope(envelope_text)?;

        // The iteration count is attacker-controlled until the tag verifies;
        // refuse to do unbounded derivation work.
        if envelope.kdf.iterations > self.max_iterations {
            return Err(FormatError::UnsupportedKdf(format!(
                "kdf.iterations: {} exceeds ceiling {}",
                envelope.kdf.iterations, self.max_iterations
            ))
            .into());
        }

        let key = derive_key(passphrase.as_bytes(), &envelope.salt, envelope.kdf.iterations)?;
        self.cipher
            .decrypt(key.as_bytes(), &envelope.iv, &envelope.ciphertext)
    }
}

/// Encrypt text with the default backends and iteration count.
pub fn encrypt(plaintext: &str, passphrase: &str) -> Result<String, CryptoError> {
    PassphraseEncryptor::new().encrypt(plaintext, passphrase)
}

/// Encrypt text with a caller-chosen PBKDF2 iteration count.
pub fn encrypt_with_iterations(
    plaintext: &str,
    passphrase: &str,
    iterations: u32,
) -> Result<String, CryptoError> {
    PassphraseEncryptor::with_iterations(iterations).encrypt(plaintext, passphrase)
}

/// Decrypt envelope text with the default backends.
pub fn decrypt(envelope_text: &str, passphrase: &str) -> Result<String, CryptoError> {
    PassphraseEncryptor::new().decrypt(envelope_text, passphrase)
}
