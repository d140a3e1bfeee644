//! WASM bindings for sealpad-crypto.
//!
//! Exposes the passphrase envelope operations via wasm-bindgen for
//! consumption by TypeScript browser code. The PBKDF2 step blocks for tens
//! of milliseconds at the default iteration count; call these from a Web
//! Worker rather than the UI thread.

mod error;

use error::to_js_error;
use sealpad_crypto::{decrypt, encrypt, encrypt_with_iterations, DEFAULT_ITERATIONS};
use wasm_bindgen::prelude::*;

/// Encrypt plaintext under a passphrase, returning envelope text.
#[wasm_bindgen(js_name = "encryptText")]
pub fn encrypt_text(
    plaintext: &str,
    passphrase: &str,
    iterations: Option<u32>,
) -> Result<String, JsValue> {
    match iterations {
        Some(iterations) => encrypt_with_iterations(plaintext, passphrase, iterations),
        None => encrypt(plaintext, passphrase),
    }
    .map_err(to_js_error)
}

/// Decrypt envelope text with a passphrase, returning the plaintext.
#[wasm_bindgen(js_name = "decryptText")]
pub fn decrypt_text(envelope_text: &str, passphrase: &str) -> Result<String, JsValue> {
    decrypt(envelope_text, passphrase).map_err(to_js_error)
}

/// The PBKDF2 iteration count used when none is supplied.
#[wasm_bindgen(js_name = "defaultIterations")]
pub fn default_iterations() -> u32 {
    DEFAULT_ITERATIONS
}
