//! Transcript message types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::role::Role;

/// Identifier of a message, unique within a session.
///
/// Ids come from a per-session sequence, so a later message always has a
/// larger id than an earlier one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageId(u64);

impl MessageId {
    pub(crate) fn new(seq: u64) -> Self {
        Self(seq)
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single message in the transcript.
///
/// Messages are immutable once created: the fields are only readable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    id: MessageId,
    role: Role,
    content: String,
    timestamp: DateTime<Utc>,
    /// The urgent flag.
    #[serde(default)]
    priority: bool,
}

impl Message {
    pub(crate) fn new(
        id: MessageId,
        role: Role,
        content: String,
        timestamp: DateTime<Utc>,
        priority: bool,
    ) -> Self {
        Self {
            id,
            role,
            content,
            timestamp,
            priority,
        }
    }

    pub fn id(&self) -> MessageId {
        self.id
    }

    /// The role that authored the message.
    pub fn role(&self) -> Role {
        self.role
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Creation time.
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// Whether the message was flagged as urgent.
    pub fn priority(&self) -> bool {
        self.priority
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_json_shape() {
        let ts = DateTime::parse_from_rfc3339("2025-03-01T09:30:00Z")
            .unwrap()
            .with_timezone(&Utc);
        let msg = Message::new(MessageId::new(7), Role::Center, "Need review".into(), ts, true);

        let value = serde_json::to_value(&msg).unwrap();
        assert_eq!(value["id"], 7);
        assert_eq!(value["role"], "center");
        assert_eq!(value["content"], "Need review");
        assert_eq!(value["priority"], true);
    }

    #[test]
    fn test_priority_defaults_to_false() {
        let json = r#"{"id":1,"role":"admin","content":"hi","timestamp":"2025-03-01T09:30:00Z"}"#;
        let msg: Message = serde_json::from_str(json).unwrap();
        assert!(!msg.priority());
        assert_eq!(msg.role(), Role::Admin);
    }
}
