use crate::assistant::Speaker;
use crate::ui::chat::intent::ChatIntent;
use crate::ui::chat::state::ChatState;
use crate::ui::mvi::Reducer;

pub struct ChatReducer;

impl Reducer for ChatReducer {
    type State = ChatState;
    type Intent = ChatIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ChatIntent::Type(text) => {
                state.input.extend(text.chars().filter(|c| !c.is_control()));
            }
            ChatIntent::Backspace => {
                state.input.pop();
            }
            ChatIntent::ClearInput => state.input.clear(),
            ChatIntent::Submit => {
                let text = state.input.clone();
                send(&mut state, text);
            }
            ChatIntent::Ask(text) => send(&mut state, text),
            ChatIntent::ReplyArrived(reply) => {
                state.conversation.push(Speaker::Bot, reply.text);
                if state.pending == Some(reply.turn) {
                    state.pending = None;
                }
                state.scroll = 0;
            }
            ChatIntent::ListeningStarted => {
                state.listening = true;
                state.notice = None;
            }
            ChatIntent::ListeningEnded => state.listening = false,
            ChatIntent::Transcript(text) => {
                state.listening = false;
                state.input = text.clone();
                send(&mut state, text);
            }
            ChatIntent::Notice(message) => state.notice = Some(message),
            ChatIntent::DismissNotice => state.notice = None,
            ChatIntent::ScrollUp { limit } => {
                state.scroll = state.scroll.saturating_add(1).min(limit);
            }
            ChatIntent::ScrollDown => state.scroll = state.scroll.saturating_sub(1),
            ChatIntent::ClampScroll(limit) => state.scroll = state.scroll.min(limit),
        }
        state
    }
}

/// Blank text and sends made while a reply is pending are dropped; the
/// input keeps its contents in that case.
fn send(state: &mut ChatState, text: String) {
    if text.trim().is_empty() || state.pending.is_some() {
        return;
    }
    let turn = state.conversation.push(Speaker::User, text);
    state.pending = Some(turn);
    state.input.clear();
    state.scroll = 0;
}
