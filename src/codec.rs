//! Transport encoding for transit payloads.
//!
//! Vault's transit engine accepts and returns plaintext as base64 text;
//! this module converts between UTF-8 strings and that form.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::error::CodecError;

/// Encode a UTF-8 string into the base64 form Vault expects.
pub fn encode(text: &str) -> String {
    STANDARD.encode(text.as_bytes())
}

/// Decode base64 text back into a UTF-8 string.
///
/// # Errors
///
/// Returns `CodecError` on malformed base64 or non-UTF-8 decoded bytes.
pub fn decode(token: &str) -> Result<String, CodecError> {
    let bytes = STANDARD
        .decode(token)
        .map_err(|e| CodecError::InvalidBase64(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| CodecError::InvalidUtf8(e.to_string()))
}
