//! The session transcript: an append-only list of chat messages.

use chrono::Utc;

use crate::api::Content;
use crate::core::constants::{GREETING, RESET_MESSAGE};
use crate::core::message::Message;

#[derive(Debug, Clone)]
pub struct Transcript {
    messages: Vec<Message>,
    last_id: i64,
}

impl Default for Transcript {
    fn default() -> Self {
        Self::new()
    }
}

impl Transcript {
    /// A fresh transcript holding only the greeting.
    pub fn new() -> Self {
        let mut transcript = Self {
            messages: Vec::new(),
            last_id: 0,
        };
        transcript.push_model(GREETING);
        transcript
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
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

    pub fn push_user(&mut self, text: impl Into<String>) -> &Message {
        let id = self.next_id();
        self.push(Message::user(id, text))
    }

    pub fn push_model(&mut self, text: impl Into<String>) -> &Message {
        let id = self.next_id();
        self.push(Message::model(id, text))
    }

    /// Replace everything with the single reset message. Ids keep increasing
    /// across resets.
    pub fn reset(&mut self) {
        self.messages.clear();
        self.push_model(RESET_MESSAGE);
    }

    /// Every message in order, shaped for the `contents` field of a request.
    pub fn history(&self) -> Vec<Content> {
        self.messages
            .iter()
            .map(|message| Content::text(message.role.as_str(), message.text.clone()))
            .collect()
    }

    fn push(&mut self, message: Message) -> &Message {
        self.messages.push(message);
        let index = self.messages.len() - 1;
        &self.messages[index]
    }

    /// Millisecond wall-clock ids, bumped when two land in the same millisecond.
    fn next_id(&mut self) -> String {
        let now = Utc::now().timestamp_millis();
        self.last_id = now.max(self.last_id + 1);
        self.last_id.to_string()
    }
}
