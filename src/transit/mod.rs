//! Remote transit operations.
//!
//! [`Transit`] abstracts the three Vault calls the relay makes so the
//! orchestration logic can run against a scripted backend in tests. The
//! real implementation is [`HttpTransit`].

mod http;

pub use http::HttpTransit;

use crate::error::TransitError;

/// The three transit-engine operations the relay issues.
///
/// Implementations must be stateless per call: each invocation is an
/// independent exchange, so concurrent orchestration runs are safe.
pub trait Transit {
    /// Create the named rsa-2048 key if it does not already exist.
    ///
    /// A conflict response means the key is already provisioned; any
    /// completed HTTP exchange counts as success. The relay ignores the
    /// outcome entirely (fire-and-forget provisioning).
    fn ensure_key(&self, key: &str) -> Result<(), TransitError>;

    /// Encrypt a base64-encoded plaintext, returning the ciphertext token.
    fn encrypt(&self, key: &str, plaintext_b64: &str) -> Result<String, TransitError>;

    /// Decrypt a ciphertext token, returning the base64-encoded plaintext.
    fn decrypt(&self, key: &str, ciphertext: &str) -> Result<String, TransitError>;
}

impl<T: Transit + ?Sized> Transit for &T {
    fn ensure_key(&self, key: &str) -> Result<(), TransitError> {
        (**self).ensure_key(key)
    }

    fn encrypt(&self, key: &str, plaintext_b64: &str) -> Result<String, TransitError> {
        (**self).encrypt(key, plaintext_b64)
    }

    fn decrypt(&self, key: &str, ciphertext: &str) -> Result<String, TransitError> {
        (**self).decrypt(key, ciphertext)
    }
}
