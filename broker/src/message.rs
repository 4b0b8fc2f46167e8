use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

/// The in-memory delivery record enqueued onto subscription inboxes.
///
/// `from` carries the publisher's subscription token so the stream writer can
/// drop a publisher's own messages; it is never put on the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Envelope {
    pub from: String,
    pub topic: String,
    pub content: String,
}

/// A published message as persisted in the message store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredMessage {
    /// Unique, time-ordered identifier assigned on publish. UUID v7, so the
    /// string form sorts lexicographically in publish order.
    pub id: String,
    pub topic: String,
    /// The publisher's subscription token; empty if the publisher is not a
    /// subscriber.
    pub from: String,
    pub content: String,
    #[serde(with = "time::serde::rfc3339")]
    pub received_at: OffsetDateTime,
    /// Tokens of subscriptions whose inbox has accepted this message.
    #[serde(default)]
    pub received_by: Vec<String>,
}

impl StoredMessage {
    pub fn new(topic: String, from: String, content: String, received_at: OffsetDateTime) -> Self {
        Self {
            id: Uuid::now_v7().to_string(),
            topic,
            from,
            content,
            received_at,
            received_by: Vec::new(),
        }
    }

    pub fn envelope(&self) -> Envelope {
        Envelope {
            from: self.from.clone(),
            topic: self.topic.clone(),
            content: self.content.clone(),
        }
    }

    pub fn was_received_by(&self, token: &str) -> bool {
        self.received_by.iter().any(|t| t == token)
    }

    /// Records a delivery receipt. Set-append: recording the same token twice
    /// is a no-op, and the return value tells whether anything changed.
    pub fn mark_received(&mut self, token: &str) -> bool {
        if self.was_received_by(token) {
            return false;
        }
        self.received_by.push(token.to_string());
        true
    }
}
