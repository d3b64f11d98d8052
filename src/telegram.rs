//! Long-polling Telegram transport.
//!
//! Drives the [`Handlers`] surface: `/start` and `/help` commands plus a
//! catch-all text handler. Transport failures are logged and polling
//! resumes; only startup errors are returned to the caller.

use std::time::Duration;

use reqwest::blocking::Client;
use serde::Deserialize;
use serde_json::json;
use tracing::{info, warn};

use crate::dispatch::Handlers;
use crate::error::{Error, Result};

/// How long one `getUpdates` call holds open waiting for traffic.
const POLL_TIMEOUT_SECS: u64 = 30;

/// Pause before retrying after a failed poll.
const RETRY_DELAY_SECS: u64 = 3;

#[derive(Debug, Deserialize)]
struct UpdatesResponse {
    ok: bool,
    #[serde(default)]
    result: Vec<Update>,
}

#[derive(Debug, Deserialize)]
struct Update {
    update_id: i64,
    #[serde(default)]
    message: Option<Message>,
}

#[derive(Debug, Deserialize)]
struct Message {
    chat: Chat,
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    from: Option<User>,
}

#[derive(Debug, Deserialize)]
struct Chat {
    id: i64,
}

#[derive(Debug, Deserialize)]
struct User {
    first_name: String,
}

/// Blocking long-poll client for the Telegram Bot API.
pub struct Bot {
    client: Client,
    base_url: String,
}

impl Bot {
    /// Build the transport from a bot token.
    pub fn new(token: &str) -> Result<Self> {
        // The poll request itself holds for POLL_TIMEOUT_SECS, so the
        // client timeout must sit above it.
        let client = Client::builder()
            .timeout(Duration::from_secs(POLL_TIMEOUT_SECS + 10))
            .build()
            .map_err(|e| Error::Transport(format!("failed to build http client: {e}")))?;

        Ok(Self {
            client,
            base_url: format!("https://api.telegram.org/bot{token}"),
        })
    }

    /// Poll for updates forever, dispatching each message to `handlers`
    /// and sending the reply back to the originating chat.
    pub fn run(&self, handlers: &dyn Handlers) -> Result<()> {
        info!("starting long-poll loop");
        let mut offset: i64 = 0;

        loop {
            let updates = match self.get_updates(offset) {
                Ok(u) => u,
                Err(e) => {
                    warn!(error = %e, "getUpdates failed, retrying");
                    std::thread::sleep(Duration::from_secs(RETRY_DELAY_SECS));
                    continue;
                }
            };

            for update in updates {
                offset = offset.max(update.update_id + 1);
                let Some(message) = update.message else { continue };
                let Some(text) = message.text else { continue };

                let reply = dispatch(handlers, &text, message.from.as_ref());
                if let Err(e) = self.send_message(message.chat.id, &reply) {
                    warn!(chat = message.chat.id, error = %e, "sendMessage failed");
                }
            }
        }
    }

    fn get_updates(&self, offset: i64) -> Result<Vec<Update>> {
        let resp = self
            .client
            .post(format!("{}/getUpdates", self.base_url))
            .json(&json!({"offset": offset, "timeout": POLL_TIMEOUT_SECS}))
            .send()
            .map_err(|e| Error::Transport(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(Error::Transport(format!(
                "getUpdates returned http status {status}"
            )));
        }

        let parsed: UpdatesResponse = resp
            .json()
            .map_err(|e| Error::Transport(e.to_string()))?;
        if !parsed.ok {
            return Err(Error::Transport("getUpdates returned ok=false".to_string()));
        }

        Ok(parsed.result)
    }

    fn send_message(&self, chat_id: i64, text: &str) -> Result<()> {
        let resp = self
            .client
            .post(format!("{}/sendMessage", self.base_url))
            .json(&json!({"chat_id": chat_id, "text": text}))
            .send()
            .map_err(|e| Error::Transport(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(Error::Transport(format!(
                "sendMessage returned http status {status}"
            )));
        }
        Ok(())
    }
}

/// Classify one inbound message and produce its reply.
fn dispatch(handlers: &dyn Handlers, text: &str, from: Option<&User>) -> String {
    match text.trim() {
        "/start" => {
            let sender = from.map(|u| u.first_name.as_str()).unwrap_or("there");
            handlers.on_start(sender)
        }
        "/help" => handlers.on_help(),
        _ => handlers.on_text(text),
    }
}
