//! Courier - a chat-command relay for Vault's transit encryption engine.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── command       # Inbound command grammar + key-name validation
//! ├── codec         # base64 transport encoding
//! ├── transit/      # Vault transit client
//! │   ├── mod       # Transit trait
//! │   └── http      # Blocking HTTP implementation
//! ├── relay         # Encrypt/decrypt orchestration
//! ├── dispatch      # Handler surface a transport drives
//! ├── telegram      # Long-polling Telegram transport
//! ├── config        # Environment configuration
//! └── error         # Error taxonomy
//! ```
//!
//! # Features
//!
//! - `e:<key>:<message>` / `d:<key>:<token>` command grammar
//! - On-demand transit key provisioning (rsa-2048)
//! - Every inbound message gets exactly one reply, never a crash

pub mod codec;
pub mod command;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod relay;
pub mod telegram;
pub mod transit;
