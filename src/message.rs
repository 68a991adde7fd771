//! Message records as the contract returns them and as the page shows them.

use chrono::{DateTime, TimeZone, Utc};

/// A message exactly as stored on chain: timestamp in seconds since the epoch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawMessage {
    pub sender: String,
    pub timestamp: u64,
    pub text: String,
}

/// A message ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub sender: String,
    pub text: String,
    pub submitted_at: DateTime<Utc>,
}

impl From<RawMessage> for Message {
    fn from(raw: RawMessage) -> Self {
        // Out of range timestamps clamp to the epoch rather than dropping the message.
        let submitted_at = i64::try_from(raw.timestamp)
            .ok()
            .and_then(|secs| Utc.timestamp_opt(secs, 0).single())
            .unwrap_or_default();
        Message {
            sender: raw.sender,
            text: raw.text,
            submitted_at,
        }
    }
}

impl Message {
    pub fn display_time(&self) -> String {
        self.submitted_at.format("%b %e, %Y %H:%M UTC").to_string()
    }
}

/// Normalizes a chronological list from the contract into most-recent-first display order.
pub fn into_display_order(raw: Vec<RawMessage>) -> Vec<Message> {
    raw.into_iter().rev().map(Message::from).collect()
}

/// Shortens an address to `0x1234…abcd`.
pub fn short_address(address: &str) -> String {
    if address.len() <= 10 || !address.is_ascii() {
        return address.to_string();
    }
    format!("{}…{}", &address[..6], &address[address.len() - 4..])
}
