//! Envelope wire format.
//!
//! Envelope text is a JSON object with fixed field names:
//!
//! ```json
//! {
//!   "format": "AES-256-GCM+PBKDF2",
//!   "kdf": { "name": "PBKDF2", "hash": "SHA-256", "iterations": 200000 },
//!   "saltHex": "<32 hex chars>",
//!   "ivHex": "<24 hex chars>",
//!   "ciphertextB64": "<base64 of ciphertext||tag>"
//! }
//! ```
//!
//! The codec performs no cryptographic operations and trusts none of the
//! decoded values beyond structural validity.

use base64ct::{Base64, Encoding};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::FormatError;
use crate::types::{ENVELOPE_FORMAT, IV_LENGTH, KDF_HASH, KDF_NAME, SALT_LENGTH};

/// KDF parameters carried inside an envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KdfParams {
    pub name: String,
    pub hash: String,
    pub iterations: u32,
}

impl KdfParams {
    /// PBKDF2-HMAC-SHA-256 parameters at the given iteration count.
    pub fn pbkdf2_sha256(iterations: u32) -> Self {
        Self {
            name: KDF_NAME.to_string(),
            hash: KDF_HASH.to_string(),
            iterations,
        }
    }
}

/// Decoded envelope fields.
///
/// Plain data, no secret material: salt, IV, and ciphertext are public by
/// definition. Immutable once produced; decrypt never mutates one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Envelope {
    pub format: String,
    pub kdf: KdfParams,
    pub salt: [u8; SALT_LENGTH],
    pub iv: [u8; IV_LENGTH],
    pub ciphertext: Vec<u8>,
}

#[derive(Serialize)]
struct WireKdf<'a> {
    name: &'a str,
    hash: &'a str,
    iterations: u32,
}

#[derive(Serialize)]
struct WireEnvelope<'a> {
    format: &'a str,
    kdf: WireKdf<'a>,
    #[serde(rename = "saltHex")]
    salt_hex: String,
    #[serde(rename = "ivHex")]
    iv_hex: String,
    #[serde(rename = "ciphertextB64")]
    ciphertext_b64: String,
}

/// Serialize an envelope to its JSON text form.
///
/// Salt and IV are lowercase hex; ciphertext is standard padded base64.
pub fn encode_envelope(envelope: &Envelope) -> String {
    let wire = WireEnvelope {
        format: &envelope.format,
        kdf: WireKdf {
            name: &envelope.kdf.name,
            hash: &envelope.kdf.hash,
            iterations: envelope.kdf.iterations,
        },
        salt_hex: hex::encode(envelope.salt),
        iv_hex: hex::encode(envelope.iv),
        ciphertext_b64: Base64::encode_string(&envelope.ciphertext),
    };
    serde_json::to_string(&wire).expect("wire envelope serialization cannot fail")
}

/// Parse and validate envelope text.
///
/// Validation order: JSON structure, field presence, salt length, IV length,
/// ciphertext base64, iteration positivity, then supported-algorithm checks.
pub fn decode_envelope(text: &str) -> Result<Envelope, FormatError> {
    let value: Value = serde_json::from_str(text)
        .map_err(|e| FormatError::MalformedStructure(e.to_string()))?;
    let obj = value
        .as_object()
        .ok_or_else(|| FormatError::MalformedStructure("expected a JSON object".to_string()))?;

    let format_value = require(obj, "format")?;
    let kdf_value = require(obj, "kdf")?;
    let kdf_obj = kdf_value.as_object().ok_or_else(|| {
        FormatError::MalformedStructure("kdf must be a JSON object".to_string())
    })?;
    let kdf_name_value = require_nested(kdf_obj, "kdf.name", "name")?;
    let kdf_hash_value = require_nested(kdf_obj, "kdf.hash", "hash")?;
    let iterations_value = require_nested(kdf_obj, "kdf.iterations", "iterations")?;
    let salt_value = require(obj, "saltHex")?;
    let iv_value = require(obj, "ivHex")?;
    let ciphertext_value = require(obj, "ciphertextB64")?;

    let format = require_string(format_value, "format")?;
    let kdf_name = require_string(kdf_name_value, "kdf.name")?;
    let kdf_hash = require_string(kdf_hash_value, "kdf.hash")?;

    let salt = decode_hex_field(salt_value, "saltHex", SALT_LENGTH)?;
    let iv = decode_hex_field(iv_value, "ivHex", IV_LENGTH)?;

    let ciphertext_b64 = require_string(ciphertext_value, "ciphertextB64")?;
    let ciphertext = Base64::decode_vec(ciphertext_b64).map_err(|e| {
        FormatError::InvalidEncoding {
            field: "ciphertextB64",
            reason: e.to_string(),
        }
    })?;

    // Positive integer; read before the key is derived, so any positive
    // value round-trips (the decrypt ceiling is the orchestrator's job).
    let iterations_raw = iterations_value
        .as_u64()
        .filter(|&n| n > 0)
        .ok_or_else(|| FormatError::InvalidEncoding {
            field: "kdf.iterations",
            reason: "expected a positive integer".to_string(),
        })?;

    if format != ENVELOPE_FORMAT {
        return Err(FormatError::UnsupportedKdf(format!(
            "format: expected {:?}, got {:?}",
            ENVELOPE_FORMAT, format
        )));
    }
    if kdf_name != KDF_NAME {
        return Err(FormatError::UnsupportedKdf(format!(
            "kdf.name: expected {:?}, got {:?}",
            KDF_NAME, kdf_name
        )));
    }
    if kdf_hash != KDF_HASH {
        return Err(FormatError::UnsupportedKdf(format!(
            "kdf.hash: expected {:?}, got {:?}",
            KDF_HASH, kdf_hash
        )));
    }
    let iterations = u32::try_from(iterations_raw).map_err(|_| {
        FormatError::UnsupportedKdf(format!(
            "kdf.iterations: {} exceeds supported maximum {}",
            iterations_raw,
            u32::MAX
        ))
    })?;

    // Lengths validated by decode_hex_field, so try_into cannot fail
    Ok(Envelope {
        format: format.to_string(),
        kdf: KdfParams {
            name: kdf_name.to_string(),
            hash: kdf_hash.to_string(),
            iterations,
        },
        salt: salt.try_into().expect("salt is exactly 16 bytes"),
        iv: iv.try_into().expect("iv is exactly 12 bytes"),
        ciphertext,
    })
}

fn require<'a>(
    obj: &'a Map<String, Value>,
    field: &'static str,
) -> Result<&'a Value, FormatError> {
    match obj.get(field) {
        Some(Value::Null) | None => Err(FormatError::MissingField(field)),
        Some(value) => Ok(value),
    }
}

fn require_nested<'a>(
    obj: &'a Map<String, Value>,
    field: &'static str,
    key: &str,
) -> Result<&'a Value, FormatError> {
    match obj.get(key) {
        Some(Value::Null) | None => Err(FormatError::MissingField(field)),
        Some(value) => Ok(value),
    }
}

fn require_string<'a>(value: &'a Value, field: &'static str) -> Result<&'a str, FormatError> {
    value.as_str().ok_or_else(|| FormatError::InvalidEncoding {
        field,
        reason: "expected a string".to_string(),
    })
}

fn decode_hex_field(
    value: &Value,
    field: &'static str,
    expected_len: usize,
) -> Result<Vec<u8>, FormatError> {
    let text = require_string(value, field)?;
    // hex::decode accepts mixed case; encode always emits lowercase.
    let bytes = hex::decode(text).map_err(|e| FormatError::InvalidEncoding {
        field,
        reason: e.to_string(),
    })?;
    if bytes.len() != expected_len {
        return Err(FormatError::InvalidEncoding {
            field,
            reason: format!(
                "expected {} hex chars, got {}",
                expected_len * 2,
                text.len()
            ),
        });
    }
    Ok(bytes)
}
