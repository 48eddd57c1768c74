//! The transcript store: an ordered, append-only (until cleared) message list.

use chrono::{DateTime, Duration, Utc};
use tracing::debug;

use super::message::{Message, MessageId};
use crate::role::Role;

/// Example conversation a fresh session starts with: role, content,
/// seconds before "now", urgent.
const SEED_MESSAGES: [(Role, &str, i64, bool); 3] = [
    (
        Role::Admin,
        "Welcome to the chat system. All roles are now connected.",
        300,
        false,
    ),
    (
        Role::Radiologist,
        "Hello everyone, ready to discuss the cases.",
        240,
        false,
    ),
    (
        Role::Center,
        "Good morning team, we have several urgent requests today.",
        180,
        true,
    ),
];

/// Ordered sequence of messages; insertion order is display order.
///
/// The store trusts its caller for authorship: `send` stamps whatever role
/// it is given. [`ChatSession`](super::ChatSession) is the validated path.
#[derive(Debug, Clone)]
pub struct Transcript {
    messages: Vec<Message>,
    next_id: u64,
    trim_content: bool,
}

impl Default for Transcript {
    fn default() -> Self {
        Self::new()
    }
}

impl Transcript {
    /// Creates an empty transcript that stores trimmed content.
    pub fn new() -> Self {
        Self {
            messages: Vec::new(),
            next_id: 1,
            trim_content: true,
        }
    }

    /// Creates a transcript pre-filled with the example conversation,
    /// timestamped relative to `now`.
    pub fn seeded(now: DateTime<Utc>) -> Self {
        let mut transcript = Self::new();
        transcript.seed(now);
        transcript
    }

    /// Sets whether content is stored trimmed (`true`) or exactly as sent.
    pub fn with_trim_content(mut self, trim_content: bool) -> Self {
        self.trim_content = trim_content;
        self
    }

    /// Appends the example conversation.
    pub fn seed(&mut self, now: DateTime<Utc>) {
        for (role, content, secs_ago, urgent) in SEED_MESSAGES {
            self.append_at(role, content, urgent, now - Duration::seconds(secs_ago));
        }
    }

    /// Whether `role` may flag a message as urgent.
    pub fn urgent_eligible(role: Role) -> bool {
        role.urgent_eligible()
    }

    /// Appends a message stamped with the current time.
    ///
    /// Content that is empty after trimming is silently ignored.
    pub fn send(&mut self, role: Role, content: &str, urgent: bool) -> &[Message] {
        self.append_at(role, content, urgent, Utc::now());
        &self.messages
    }

    /// Appends a message with an explicit timestamp, returning it.
    ///
    /// Returns `None` without touching the transcript when the content is
    /// empty after trimming.
    pub fn append_at(
        &mut self,
        role: Role,
        content: &str,
        urgent: bool,
        at: DateTime<Utc>,
    ) -> Option<&Message> {
        let trimmed = content.trim();
        if trimmed.is_empty() {
            debug!(%role, "ignoring empty message");
            return None;
        }

        let stored = if self.trim_content { trimmed } else { content };
        let id = MessageId::new(self.next_id);
        self.next_id += 1;

        self.messages
            .push(Message::new(id, role, stored.to_string(), at, urgent));
        debug!(%role, %id, urgent, len = self.messages.len(), "message appended");
        self.messages.last()
    }

    /// Empties the transcript. Ids keep counting up afterwards.
    pub fn clear(&mut self) -> &[Message] {
        let removed = self.messages.len();
        self.messages.clear();
        debug!(removed, "transcript cleared");
        &self.messages
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Message> {
        self.messages.iter()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }
}
