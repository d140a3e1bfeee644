/// Format tag written into every envelope, naming the algorithm combination.
///
/// Not cryptographically authenticated; used for forward-compatible dispatch
/// when future profiles are added.
pub const ENVELOPE_FORMAT: &str = "AES-256-GCM+PBKDF2";

/// KDF name carried in the envelope's `kdf.name` field.
pub const KDF_NAME: &str = "PBKDF2";

/// KDF hash carried in the envelope's `kdf.hash` field.
pub const KDF_HASH: &str = "SHA-256";

/// PBKDF2 salt length in bytes.
pub const SALT_LENGTH: usize = 16;

/// AES-GCM IV length in bytes (96 bits per NIST recommendation).
pub const IV_LENGTH: usize = 12;

/// AES-GCM tag length in bytes (128 bits).
pub const TAG_LENGTH: usize = 16;

/// AES key length in bytes (256 bits).
pub const KEY_LENGTH: usize = 32;

/// Default PBKDF2 iteration count for encryption.
pub const DEFAULT_ITERATIONS: u32 = 200_000;

/// Default ceiling on the iteration count accepted from an envelope at
/// decrypt time (50x the encrypt default).
///
/// The envelope's `kdf.iterations` field is read before any authentication
/// occurs, so a malicious envelope could otherwise demand an arbitrarily
/// expensive derivation.
pub const MAX_DECRYPT_ITERATIONS: u32 = 10_000_000;
