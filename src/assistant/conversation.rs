//! Sequential chat log. Purely a record; the matcher never reads it.

use std::time::SystemTime;

pub const DEFAULT_GREETING: &str = "Hello! I'm your SupplySoul assistant. Ask me about stock levels, item details, or search for specific medications.";

/// Suggestions offered while the log holds only the greeting.
pub const QUICK_QUESTIONS: [&str; 4] = [
    "What items are low in stock?",
    "Show me all pain relief items",
    "How many items are out of stock?",
    "What's the total inventory count?",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Speaker {
    User,
    Bot,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChatMessage {
    pub id: u64,
    pub speaker: Speaker,
    pub text: String,
    pub timestamp: SystemTime,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Conversation {
    messages: Vec<ChatMessage>,
}

impl Conversation {
    pub fn with_greeting(greeting: impl Into<String>) -> Self {
        let mut conversation = Self::default();
        conversation.push(Speaker::Bot, greeting.into());
        conversation
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// True while nothing beyond the greeting has been exchanged.
    pub fn is_fresh(&self) -> bool {
        self.messages.len() <= 1
    }

    pub fn push(&mut self, speaker: Speaker, text: String) -> u64 {
        let id = self.messages.last().map_or(1, |m| m.id + 1);
        self.messages.push(ChatMessage {
            id,
            speaker,
            text,
            timestamp: SystemTime::now(),
        });
        id
    }
}
