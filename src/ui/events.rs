use crossterm::event::{self, Event, KeyEvent};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::{Duration, Instant};

use crate::assistant::{AssistantReply, SpeechEvent};
use crate::shutdown::ShutdownHandle;

/// Longest single wait on the terminal, so shutdown is noticed promptly.
const MAX_POLL: Duration = Duration::from_millis(50);

#[derive(Debug)]
pub enum AppEvent {
    Key(KeyEvent),
    Paste(String),
    Tick,
    Resize(u16, u16),
    /// A scheduled assistant reply came due.
    Reply(AssistantReply),
    /// Terminal event of a voice activation.
    Speech(SpeechEvent),
    /// Ctrl-C or SIGTERM arrived.
    Shutdown,
}

impl AppEvent {
    fn from_terminal(event: Event) -> Option<Self> {
        match event {
            Event::Key(key) => Some(AppEvent::Key(key)),
            Event::Paste(text) => Some(AppEvent::Paste(text)),
            Event::Resize(cols, rows) => Some(AppEvent::Resize(cols, rows)),
            _ => None,
        }
    }
}

/// Single queue the UI loop drains: terminal input from a polling thread,
/// plus whatever other producers push through [`EventHandler::sender`].
pub struct EventHandler {
    rx: Receiver<AppEvent>,
    tx: Sender<AppEvent>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration, shutdown: ShutdownHandle) -> Self {
        let (tx, rx) = mpsc::channel();
        let input_tx = tx.clone();
        thread::spawn(move || poll_terminal(&input_tx, tick_rate, &shutdown));
        Self { rx, tx }
    }

    pub fn next(&self, timeout: Duration) -> Result<AppEvent, mpsc::RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }

    pub fn sender(&self) -> Sender<AppEvent> {
        self.tx.clone()
    }
}

/// Returns when shutdown is requested, the receiver is gone, or the
/// terminal stops answering.
fn poll_terminal(tx: &Sender<AppEvent>, tick_rate: Duration, shutdown: &ShutdownHandle) {
    let mut last_tick = Instant::now();
    while !shutdown.is_shutting_down() {
        let wait = tick_rate.saturating_sub(last_tick.elapsed()).min(MAX_POLL);
        let ready = match event::poll(wait) {
            Ok(ready) => ready,
            Err(err) => {
                tracing::error!(error = %err, "Terminal poll failed");
                return;
            }
        };

        if ready {
            let event = match event::read() {
                Ok(event) => event,
                Err(err) => {
                    tracing::error!(error = %err, "Terminal read failed");
                    return;
                }
            };
            if let Some(app_event) = AppEvent::from_terminal(event) {
                if tx.send(app_event).is_err() {
                    return;
                }
            }
        }

        if last_tick.elapsed() >= tick_rate {
            if tx.send(AppEvent::Tick).is_err() {
                return;
            }
            last_tick = Instant::now();
        }
    }
    let _ = tx.send(AppEvent::Shutdown);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    #[test]
    fn terminal_events_are_translated() {
        let key = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE);
        assert!(matches!(
            AppEvent::from_terminal(Event::Key(key)),
            Some(AppEvent::Key(k)) if k == key
        ));
        assert!(matches!(
            AppEvent::from_terminal(Event::Resize(80, 24)),
            Some(AppEvent::Resize(80, 24))
        ));
        assert!(AppEvent::from_terminal(Event::FocusGained).is_none());
    }

    #[test]
    fn sender_feeds_the_same_queue() {
        let (tx, rx) = mpsc::channel();
        let handler = EventHandler { rx, tx };
        handler
            .sender()
            .send(AppEvent::Reply(AssistantReply {
                turn: 2,
                text: "ok".into(),
            }))
            .unwrap();
        assert!(matches!(
            handler.next(Duration::from_millis(100)),
            Ok(AppEvent::Reply(reply)) if reply.turn == 2
        ));
    }
}
