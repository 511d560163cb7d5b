use crate::assistant::{
    recognizer_for, AssistantReply, ReplyScheduler, ReplySink, SpeechEvent, SpeechSink,
};
use crate::config::Config;
use crate::shutdown::{watch_signals, ShutdownHandle};
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::page::Page;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use parking_lot::Mutex;
use std::io;
use std::sync::mpsc;
use std::sync::Arc;
use std::time::Duration;

/// Runs the interactive UI until the user quits or a signal arrives.
pub fn run(config: &Config, page: Page) -> io::Result<()> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .build()?;
    let shutdown = ShutdownHandle::new();
    let signal_handle = shutdown.clone();
    runtime.spawn(async move {
        if let Err(err) = watch_signals(signal_handle).await {
            tracing::warn!(error = %err, "Signal watcher failed");
        }
    });

    let tick_rate = Duration::from_millis(config.ui.tick_rate_ms);
    let events = EventHandler::new(tick_rate, shutdown.clone());
    let mut app = App::new(config, page);
    app.set_reply_scheduler(ReplyScheduler::new(
        runtime.handle().clone(),
        Duration::from_millis(config.assistant.response_delay_ms),
        reply_sink(events.sender()),
    ));
    app.set_speech(
        recognizer_for(&config.assistant.speech_command),
        speech_sink(events.sender()),
    );

    let (mut terminal, guard) = setup_terminal()?;
    let (cols, rows) = crossterm::terminal::size()?;
    app.on_resize(cols, rows);
    tracing::info!(page = page.title(), "UI started");

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Paste(text)) => app.on_paste(&text),
            Ok(AppEvent::Tick) => {}
            Ok(AppEvent::Resize(cols, rows)) => app.on_resize(cols, rows),
            Ok(AppEvent::Reply(reply)) => app.on_reply(reply),
            Ok(AppEvent::Speech(event)) => app.on_speech(event),
            Ok(AppEvent::Shutdown) => app.request_quit(),
            Err(mpsc::RecvTimeoutError::Timeout) => {}
            Err(mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    shutdown.signal();
    drop(guard);
    runtime.shutdown_timeout(Duration::from_millis(100));
    tracing::info!("UI stopped");
    Ok(())
}

fn reply_sink(tx: mpsc::Sender<AppEvent>) -> ReplySink {
    let tx = Mutex::new(tx);
    Arc::new(move |reply: AssistantReply| {
        let _ = tx.lock().send(AppEvent::Reply(reply));
    })
}

fn speech_sink(tx: mpsc::Sender<AppEvent>) -> SpeechSink {
    let tx = Mutex::new(tx);
    Arc::new(move |event: SpeechEvent| {
        let _ = tx.lock().send(AppEvent::Speech(event));
    })
}
