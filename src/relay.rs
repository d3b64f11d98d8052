//! Encrypt/decrypt orchestration.
//!
//! One inbound line in, exactly one reply string out. Every failure path
//! becomes a user-facing message; nothing here panics or stays silent.

use tracing::{debug, info, warn};

use crate::codec;
use crate::command::{validate_key_name, Command};
use crate::dispatch::Handlers;
use crate::transit::Transit;

/// Usage text sent for unrecognized input and `/help`.
pub const USAGE: &str = "Usage:\n\
    To encrypt a message: e:<your_key>:<your_message>\n\
    To decrypt a message: d:<your_key>:<ciphertext>\n\
    Key names may contain only lowercase letters and digits.";

pub const KEY_NAME_GUIDANCE: &str =
    "Key name is not valid. Use only numbers or lowercase letters";

pub const EMPTY_MESSAGE_GUIDANCE: &str = "Message not valid!\n\
    To encrypt a message: e:<your_key>:<your_message>\n\
    To decrypt a message: d:<your_key>:<ciphertext>";

pub const ENCRYPT_FAILURE: &str = "Error encrypting message...";

pub const DECRYPT_FAILURE: &str = "Error in decrypting message...";

/// The orchestrator: composes parser, validator, codec, and transit
/// client into the encrypt and decrypt flows.
///
/// Holds no per-message state, so one `Relay` can serve concurrent
/// messages as long as `T` is stateless per call.
pub struct Relay<T: Transit> {
    transit: T,
}

impl<T: Transit> Relay<T> {
    pub fn new(transit: T) -> Self {
        Self { transit }
    }

    /// Process one inbound line to a single reply.
    pub fn handle(&self, line: &str) -> String {
        match Command::parse(line) {
            Command::Encrypt { key, payload } => self.encrypt_flow(&key, &payload),
            Command::Decrypt { key, ciphertext } => self.decrypt_flow(&key, &ciphertext),
            Command::Invalid => USAGE.to_string(),
        }
    }

    fn encrypt_flow(&self, key: &str, payload: &str) -> String {
        if !validate_key_name(key) {
            return KEY_NAME_GUIDANCE.to_string();
        }
        if payload.is_empty() {
            return EMPTY_MESSAGE_GUIDANCE.to_string();
        }

        // Fire-and-forget provisioning: a conflict just means the key
        // already exists, and a real failure surfaces on encrypt anyway.
        if let Err(e) = self.transit.ensure_key(key) {
            debug!(key, error = %e, "key provisioning failed, continuing");
        }

        let encoded = codec::encode(payload);
        match self.transit.encrypt(key, &encoded) {
            Ok(token) => {
                info!(key, "message encrypted");
                token
            }
            Err(e) => {
                warn!(key, error = %e, "transit encrypt failed");
                ENCRYPT_FAILURE.to_string()
            }
        }
    }

    fn decrypt_flow(&self, key: &str, ciphertext: &str) -> String {
        if !validate_key_name(key) {
            return KEY_NAME_GUIDANCE.to_string();
        }
        if ciphertext.is_empty() {
            return EMPTY_MESSAGE_GUIDANCE.to_string();
        }

        let plaintext_b64 = match self.transit.decrypt(key, ciphertext) {
            Ok(p) => p,
            Err(e) => {
                warn!(key, error = %e, "transit decrypt failed");
                return DECRYPT_FAILURE.to_string();
            }
        };

        match codec::decode(&plaintext_b64) {
            Ok(plaintext) if !plaintext.is_empty() => {
                info!(key, "message decrypted");
                plaintext
            }
            Ok(_) => {
                warn!(key, "decrypt returned an empty plaintext");
                DECRYPT_FAILURE.to_string()
            }
            Err(e) => {
                warn!(key, error = %e, "decrypt response was not valid base64 utf-8");
                DECRYPT_FAILURE.to_string()
            }
        }
    }
}

impl<T: Transit> Handlers for Relay<T> {
    fn on_start(&self, sender: &str) -> String {
        format!("Hi {sender}! I encrypt and decrypt messages with Vault's transit engine. Send /help to see how.")
    }

    fn on_help(&self) -> String {
        USAGE.to_string()
    }

    fn on_text(&self, text: &str) -> String {
        debug!(len = text.len(), "received message");
        self.handle(text)
    }
}
