use crate::assistant::{ChatMessage, Conversation, DEFAULT_GREETING};
use crate::inventory::Inventory;
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq)]
pub struct ChatState {
    /// Snapshot the assistant answers from; never edited on this page.
    pub inventory: Inventory,
    pub conversation: Conversation,
    pub input: String,
    /// Turn id of the user message awaiting a reply.
    pub pending: Option<u64>,
    pub listening: bool,
    pub notice: Option<String>,
    /// Lines scrolled back from the newest message.
    pub scroll: u16,
}

impl UiState for ChatState {}

impl Default for ChatState {
    fn default() -> Self {
        Self::new(Inventory::default(), DEFAULT_GREETING)
    }
}

impl ChatState {
    pub fn new(inventory: Inventory, greeting: &str) -> Self {
        Self {
            inventory,
            conversation: Conversation::with_greeting(greeting),
            input: String::new(),
            pending: None,
            listening: false,
            notice: None,
            scroll: 0,
        }
    }

    pub fn is_thinking(&self) -> bool {
        self.pending.is_some()
    }

    /// The user message a pending reply answers.
    pub fn pending_query(&self) -> Option<&ChatMessage> {
        let turn = self.pending?;
        self.conversation.messages().iter().find(|m| m.id == turn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_holds_the_greeting() {
        let state = ChatState::default();
        assert!(state.conversation.is_fresh());
        assert_eq!(state.conversation.messages()[0].text, DEFAULT_GREETING);
        assert!(!state.is_thinking());
        assert!(state.pending_query().is_none());
    }
}
