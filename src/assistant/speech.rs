//! Voice input port.
//!
//! The assistant does not own a speech engine. A [`SpeechRecognizer`] is
//! injected; each activation ends with exactly one [`SpeechEvent`]
//! delivered through the sink, and only the final transcript reaches the
//! chat, through the same path as typed input.

use parking_lot::Mutex;
use std::io::Read;
use std::process::{Child, Command, Stdio};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use thiserror::Error;

/// Terminal event of one activation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpeechEvent {
    Transcript(String),
    Error(String),
    End,
}

pub type SpeechSink = Arc<dyn Fn(SpeechEvent) + Send + Sync>;

#[derive(Debug, Error)]
pub enum SpeechError {
    #[error("Speech recognition is not supported in this terminal.")]
    Unsupported,

    #[error("Speech recognition is already listening")]
    Busy,

    #[error("Failed to start speech recognizer '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
}

/// Platform speech-to-text capability.
pub trait SpeechRecognizer: Send {
    fn name(&self) -> &'static str;

    /// Begins one activation; the sink receives a single terminal event.
    fn start(&mut self, sink: SpeechSink) -> Result<(), SpeechError>;

    /// Aborts the current activation, if any.
    fn stop(&mut self);
}

/// Placeholder used when no capability is configured.
#[derive(Debug, Default)]
pub struct UnsupportedRecognizer;

impl SpeechRecognizer for UnsupportedRecognizer {
    fn name(&self) -> &'static str {
        "unsupported"
    }

    fn start(&mut self, _sink: SpeechSink) -> Result<(), SpeechError> {
        Err(SpeechError::Unsupported)
    }

    fn stop(&mut self) {}
}

/// Runs an external speech-to-text command and treats its stdout as the transcript.
///
/// Non-zero exit reports [`SpeechEvent::Error`]; empty output or a
/// [`stop`](SpeechRecognizer::stop) reports [`SpeechEvent::End`].
pub struct CommandRecognizer {
    program: String,
    args: Vec<String>,
    child: Arc<Mutex<Option<Child>>>,
    active: Arc<AtomicBool>,
    stopped: Arc<AtomicBool>,
}

impl CommandRecognizer {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
            child: Arc::new(Mutex::new(None)),
            active: Arc::new(AtomicBool::new(false)),
            stopped: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Builds a recognizer from `[program, args...]`; `None` when empty.
    pub fn from_argv(argv: &[String]) -> Option<Self> {
        let (program, args) = argv.split_first()?;
        Some(Self::new(program.clone(), args.to_vec()))
    }
}

/// Command recognizer for a configured argv, else the unsupported one.
pub fn recognizer_for(argv: &[String]) -> Box<dyn SpeechRecognizer> {
    match CommandRecognizer::from_argv(argv) {
        Some(recognizer) => Box::new(recognizer),
        None => Box::new(UnsupportedRecognizer),
    }
}

impl SpeechRecognizer for CommandRecognizer {
    fn name(&self) -> &'static str {
        "command"
    }

    fn start(&mut self, sink: SpeechSink) -> Result<(), SpeechError> {
        if self.active.swap(true, Ordering::SeqCst) {
            return Err(SpeechError::Busy);
        }
        self.stopped.store(false, Ordering::SeqCst);

        let spawned = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn();
        let mut child = match spawned {
            Ok(child) => child,
            Err(source) => {
                self.active.store(false, Ordering::SeqCst);
                return Err(SpeechError::Spawn {
                    program: self.program.clone(),
                    source,
                });
            }
        };

        let stdout = child.stdout.take();
        *self.child.lock() = Some(child);
        tracing::debug!(program = %self.program, "Speech recognizer started");

        let child = Arc::clone(&self.child);
        let active = Arc::clone(&self.active);
        let stopped = Arc::clone(&self.stopped);
        thread::spawn(move || {
            let mut transcript = String::new();
            if let Some(mut stdout) = stdout {
                let _ = stdout.read_to_string(&mut transcript);
            }
            let finished = child.lock().take();
            let status = finished.map(|mut c| c.wait());

            let event = if stopped.load(Ordering::SeqCst) {
                SpeechEvent::End
            } else {
                match status {
                    Some(Ok(status)) if !status.success() => {
                        SpeechEvent::Error(format!("recognizer exited with {status}"))
                    }
                    Some(Err(err)) => SpeechEvent::Error(err.to_string()),
                    _ if transcript.trim().is_empty() => SpeechEvent::End,
                    _ => SpeechEvent::Transcript(transcript.trim().to_string()),
                }
            };
            active.store(false, Ordering::SeqCst);
            sink(event);
        });
        Ok(())
    }

    fn stop(&mut self) {
        self.stopped.store(true, Ordering::SeqCst);
        if let Some(child) = self.child.lock().as_mut() {
            let _ = child.kill();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;
    use std::time::Duration;

    fn channel_sink() -> (SpeechSink, mpsc::Receiver<SpeechEvent>) {
        let (tx, rx) = mpsc::channel();
        let tx = Mutex::new(tx);
        let sink: SpeechSink = Arc::new(move |event| {
            let _ = tx.lock().send(event);
        });
        (sink, rx)
    }

    #[test]
    fn unsupported_refuses_to_start() {
        let (sink, _rx) = channel_sink();
        let err = UnsupportedRecognizer.start(sink).unwrap_err();
        assert!(matches!(err, SpeechError::Unsupported));
        assert_eq!(
            err.to_string(),
            "Speech recognition is not supported in this terminal."
        );
    }

    #[test]
    fn empty_argv_has_no_recognizer() {
        assert!(CommandRecognizer::from_argv(&[]).is_none());
        assert_eq!(recognizer_for(&[]).name(), UnsupportedRecognizer.name());
    }

    #[cfg(unix)]
    #[test]
    fn command_stdout_becomes_transcript() {
        let argv = vec!["echo".to_string(), "low stock".to_string()];
        let mut recognizer = CommandRecognizer::from_argv(&argv).unwrap();
        let (sink, rx) = channel_sink();
        recognizer.start(sink).unwrap();
        let event = rx.recv_timeout(Duration::from_secs(5)).unwrap();
        assert_eq!(event, SpeechEvent::Transcript("low stock".to_string()));
    }

    #[cfg(unix)]
    #[test]
    fn failing_command_reports_error() {
        let argv = vec!["false".to_string()];
        let mut recognizer = CommandRecognizer::from_argv(&argv).unwrap();
        let (sink, rx) = channel_sink();
        recognizer.start(sink).unwrap();
        let event = rx.recv_timeout(Duration::from_secs(5)).unwrap();
        assert!(matches!(event, SpeechEvent::Error(_)));
    }

    #[test]
    fn missing_program_fails_to_spawn() {
        let mut recognizer = CommandRecognizer::new("supplysoul-no-such-recognizer", Vec::new());
        let (sink, _rx) = channel_sink();
        let err = recognizer.start(sink).unwrap_err();
        assert!(matches!(err, SpeechError::Spawn { .. }));
        let (sink, _rx) = channel_sink();
        assert!(matches!(
            recognizer.start(sink),
            Err(SpeechError::Spawn { .. })
        ));
    }
}
