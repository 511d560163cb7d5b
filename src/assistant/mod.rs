//! Rule-based stock assistant.
//!
//! [`IntentMatcher`] maps a free-text query to one of a fixed, ordered set
//! of intent rules and renders a canned reply from an item list. The rest
//! of the module supports the chat surface: the conversation log, the
//! deferred reply scheduler and the injectable speech port.

mod conversation;
mod matcher;
mod responder;
mod rules;
mod speech;

pub use conversation::{ChatMessage, Conversation, Speaker, DEFAULT_GREETING, QUICK_QUESTIONS};
pub use matcher::{resolve_intent, IntentMatcher, Resolution};
pub use responder::{AssistantReply, ReplyScheduler, ReplySink};
pub use rules::{
    default_rules, Capture, IntentRule, MatchContext, Predicate, QueryIntent, Responder,
    DEFAULT_CATEGORY_VOCABULARY, HELP_TEXT,
};
pub use speech::{
    recognizer_for, CommandRecognizer, SpeechError, SpeechEvent, SpeechRecognizer, SpeechSink,
    UnsupportedRecognizer,
};
