use thiserror::Error;

/// Structural failures raised while decoding envelope text.
///
/// Each variant names the offending field. The codec raises these before any
/// cryptographic work happens, so they never depend on the passphrase.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FormatError {
    #[error("envelope missing required field: {0}")]
    MissingField(&'static str),

    #[error("envelope field {field} has invalid encoding: {reason}")]
    InvalidEncoding { field: &'static str, reason: String },

    #[error("malformed envelope: {0}")]
    MalformedStructure(String),

    #[error("unsupported KDF parameters: {0}")]
    UnsupportedKdf(String),
}

/// Errors surfaced by the encrypt/decrypt operations.
///
/// `DecryptionFailed` is deliberately a unit variant: a wrong passphrase and
/// tampered ciphertext/salt/IV are indistinguishable to the caller. No
/// variant ever carries passphrase, key, or plaintext material.
#[derive(Debug, Error)]
pub enum CryptoError {
    #[error("invalid input: {0}")]
    InvalidInput(&'static str),

    #[error(transparent)]
    Format(#[from] FormatError),

    #[error("decryption failed")]
    DecryptionFailed,

    #[error("invalid parameter: {0}")]
    InvalidParameter(&'static str),

    #[error("decrypted data is not valid UTF-8")]
    InvalidUtf8,

    #[error("random number generation failed: {0}")]
    RngFailed(String),
}
