//! Handler surface the messaging transport drives.
//!
//! The transport owns update delivery and reply transmission; the relay
//! owns reply content. Each event produces exactly one reply string, so
//! a transport never has to decide whether to answer.

/// Replies to the events a chat transport can deliver.
pub trait Handlers {
    /// Greeting for the `/start` command.
    fn on_start(&self, sender: &str) -> String;

    /// Usage text for the `/help` command.
    fn on_help(&self) -> String;

    /// Any other text line.
    fn on_text(&self, text: &str) -> String;
}
