use crate::assistant::{
    AssistantReply, IntentMatcher, ReplyScheduler, SpeechError, SpeechEvent, SpeechRecognizer,
    SpeechSink, UnsupportedRecognizer, QUICK_QUESTIONS,
};
use crate::config::Config;
use crate::inventory::Inventory;
use crate::ui::catalog::{CatalogIntent, CatalogReducer, CatalogState};
use crate::ui::chat::{scroll_limit, ChatIntent, ChatReducer, ChatState};
use crate::ui::dashboard::{DashboardIntent, DashboardReducer, DashboardState};
use crate::ui::mvi::Reducer;
use crate::ui::layout::layout_regions;
use crate::ui::page::Page;
use ratatui::layout::Rect;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    page: Page,
    catalog: CatalogState,
    dashboard: DashboardState,
    chat: ChatState,
    matcher: IntentMatcher,
    /// Without a scheduler replies are delivered inline.
    replies: Option<ReplyScheduler>,
    speech: Box<dyn SpeechRecognizer>,
    speech_sink: Option<SpeechSink>,
    /// Last known terminal size.
    screen: Rect,
}

impl App {
    /// Every page starts from its own copy of the configured seed. Voice
    /// input stays unsupported until [`App::set_speech`] wires a recognizer.
    pub fn new(config: &Config, page: Page) -> Self {
        let seed = config.inventory.seed_items();
        Self {
            should_quit: false,
            page,
            catalog: CatalogState::new(Inventory::new(seed.clone())),
            dashboard: DashboardState::new(Inventory::new(seed.clone())),
            chat: ChatState::new(Inventory::new(seed), &config.assistant.greeting),
            matcher: IntentMatcher::with_vocabulary(&config.assistant.category_vocabulary),
            replies: None,
            speech: Box::new(UnsupportedRecognizer),
            speech_sink: None,
            screen: Rect::new(0, 0, 80, 24),
        }
    }

    pub fn set_reply_scheduler(&mut self, scheduler: ReplyScheduler) {
        self.replies = Some(scheduler);
    }

    pub fn set_speech(&mut self, recognizer: Box<dyn SpeechRecognizer>, sink: SpeechSink) {
        self.speech = recognizer;
        self.speech_sink = Some(sink);
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
        if self.chat.listening {
            self.speech.stop();
        }
    }

    pub fn page(&self) -> Page {
        self.page
    }

    pub fn set_page(&mut self, page: Page) {
        tracing::debug!(page = page.title(), "Page switched");
        self.page = page;
    }

    pub fn next_page(&mut self) {
        self.set_page(self.page.next());
    }

    pub fn prev_page(&mut self) {
        self.set_page(self.page.prev());
    }

    pub fn catalog(&self) -> &CatalogState {
        &self.catalog
    }

    pub fn dashboard(&self) -> &DashboardState {
        &self.dashboard
    }

    pub fn chat(&self) -> &ChatState {
        &self.chat
    }

    /// Inventory of the page currently on screen.
    pub fn active_inventory(&self) -> &Inventory {
        match self.page {
            Page::Catalog => &self.catalog.inventory,
            Page::Dashboard => &self.dashboard.inventory,
            Page::Assistant => &self.chat.inventory,
        }
    }

    pub fn dispatch_catalog(&mut self, intent: CatalogIntent) {
        dispatch_mvi!(self, catalog, CatalogReducer, intent);
    }

    pub fn dispatch_dashboard(&mut self, intent: DashboardIntent) {
        dispatch_mvi!(self, dashboard, DashboardReducer, intent);
    }

    /// Runs the chat reducer, then answers a newly pending turn.
    pub fn dispatch_chat(&mut self, intent: ChatIntent) {
        let before = self.chat.pending;
        dispatch_mvi!(self, chat, ChatReducer, intent);
        if let Some(turn) = self.chat.pending.filter(|turn| before != Some(*turn)) {
            self.answer(turn);
        }
    }

    fn answer(&mut self, turn: u64) {
        let Some(query) = self.chat.pending_query().map(|m| m.text.clone()) else {
            return;
        };
        let resolution = self.matcher.resolve(&query, self.chat.inventory.items());
        tracing::info!(turn, intent = ?resolution.intent, "Query answered");
        let reply = AssistantReply {
            turn,
            text: resolution.text,
        };
        match &self.replies {
            Some(scheduler) => scheduler.schedule(reply),
            None => self.dispatch_chat(ChatIntent::ReplyArrived(reply)),
        }
    }

    /// Sends a welcome-screen suggestion; only offered on a fresh conversation.
    pub fn ask_quick_question(&mut self, index: usize) {
        if !self.chat.conversation.is_fresh() {
            return;
        }
        if let Some(question) = QUICK_QUESTIONS.get(index) {
            self.dispatch_chat(ChatIntent::Ask(question.to_string()));
        }
    }

    pub fn on_resize(&mut self, cols: u16, rows: u16) {
        self.screen = Rect::new(0, 0, cols, rows);
        let limit = self.chat_scroll_limit();
        self.dispatch_chat(ChatIntent::ClampScroll(limit));
    }

    pub fn scroll_chat_up(&mut self) {
        let limit = self.chat_scroll_limit();
        self.dispatch_chat(ChatIntent::ScrollUp { limit });
    }

    fn chat_scroll_limit(&self) -> u16 {
        let (_, body, _) = layout_regions(self.screen);
        scroll_limit(&self.chat, body)
    }

    pub fn on_reply(&mut self, reply: AssistantReply) {
        self.dispatch_chat(ChatIntent::ReplyArrived(reply));
    }

    /// Starts listening, or aborts the current activation.
    pub fn toggle_voice(&mut self) {
        if self.chat.listening {
            self.speech.stop();
            self.dispatch_chat(ChatIntent::ListeningEnded);
            return;
        }
        let started = match self.speech_sink.clone() {
            Some(sink) => self.speech.start(sink),
            None => Err(SpeechError::Unsupported),
        };
        match started {
            Ok(()) => {
                tracing::info!(recognizer = self.speech.name(), "Listening for voice input");
                self.dispatch_chat(ChatIntent::ListeningStarted);
            }
            Err(err) => {
                tracing::warn!(error = %err, "Voice input unavailable");
                self.dispatch_chat(ChatIntent::Notice(err.to_string()));
            }
        }
    }

    pub fn on_speech(&mut self, event: SpeechEvent) {
        match event {
            SpeechEvent::Transcript(text) => self.dispatch_chat(ChatIntent::Transcript(text)),
            SpeechEvent::Error(message) => {
                tracing::warn!(error = %message, "Voice input failed");
                self.dispatch_chat(ChatIntent::ListeningEnded);
            }
            SpeechEvent::End => self.dispatch_chat(ChatIntent::ListeningEnded),
        }
    }

    /// Pasted text goes to whichever field has focus on the current page.
    pub fn on_paste(&mut self, text: &str) {
        let text = text.replace(['\r', '\n'], " ");
        match self.page {
            Page::Catalog => self.dispatch_catalog(CatalogIntent::Type(text)),
            Page::Dashboard => self.dispatch_dashboard(DashboardIntent::Type(text)),
            Page::Assistant => self.dispatch_chat(ChatIntent::Type(text)),
        }
    }
}
