//! Player-facing notifications.

use crate::types::Colour;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Message {
    pub text: String,
    pub colour: Colour,
}

pub trait MessageSink {
    fn message(&mut self, text: String, colour: Colour);
}

/// In-memory sink that keeps every message in the order it was sent.
#[derive(Clone, Debug, Default)]
pub struct MessageLog {
    messages: Vec<Message>,
}

impl MessageLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

impl MessageSink for MessageLog {
    fn message(&mut self, text: String, colour: Colour) {
        self.messages.push(Message { text, colour });
    }
}
