use crate::assistant::AssistantReply;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum ChatIntent {
    Type(String),
    Backspace,
    ClearInput,
    /// Sends the composed input.
    Submit,
    /// Sends `text` as if typed, used by quick questions.
    Ask(String),
    ReplyArrived(AssistantReply),
    ListeningStarted,
    ListeningEnded,
    /// Recognized speech; fills the input and sends it.
    Transcript(String),
    Notice(String),
    DismissNotice,
    /// Scrolls back one line, never past `limit`.
    ScrollUp { limit: u16 },
    ScrollDown,
    /// Pulls the scroll offset back within `limit` after a resize.
    ClampScroll(u16),
}

impl Intent for ChatIntent {}
