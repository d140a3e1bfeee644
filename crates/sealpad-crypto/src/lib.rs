//! Passphrase-based authenticated-encryption envelopes.
//!
//! A passphrase is stretched into a 256-bit key with PBKDF2-HMAC-SHA-256,
//! the plaintext is sealed with AES-256-GCM, and the result is serialized
//! into a self-describing JSON envelope carrying the KDF parameters, salt,
//! and IV. Decryption needs only the envelope text and the passphrase.
//!
//! ```
//! use sealpad_crypto::{decrypt, encrypt};
//!
//! let envelope = encrypt("hello world", "correct-horse-battery-staple").unwrap();
//! let plaintext = decrypt(&envelope, "correct-horse-battery-staple").unwrap();
//! assert_eq!(plaintext, "hello world");
//! ```

pub mod cipher;
pub mod encryptor;
pub mod envelope;
pub mod error;
pub mod kdf;
pub mod rng;
pub mod types;

pub use cipher::{AeadCipher, Aes256GcmCipher};
pub use encryptor::{decrypt, encrypt, encrypt_with_iterations, PassphraseEncryptor};
pub use envelope::{decode_envelope, encode_envelope, Envelope, KdfParams};
pub use error::{CryptoError, FormatError};
pub use kdf::{derive_key, DerivedKey};
pub use rng::{RandomSource, SystemRandom};
pub use types::{
    DEFAULT_ITERATIONS, ENVELOPE_FORMAT, IV_LENGTH, KEY_LENGTH, MAX_DECRYPT_ITERATIONS,
    SALT_LENGTH, TAG_LENGTH,
};
