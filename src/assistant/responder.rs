//! Deferred delivery of assistant replies.

use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;

/// Reply text tagged with the user turn that triggered it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssistantReply {
    pub turn: u64,
    pub text: String,
}

pub type ReplySink = Arc<dyn Fn(AssistantReply) + Send + Sync>;

/// Delivers each reply after a fixed "thinking" delay.
///
/// Replies are not cancelled and not serialized: two replies scheduled
/// back to back are delivered in timer order.
#[derive(Clone)]
pub struct ReplyScheduler {
    handle: Handle,
    delay: Duration,
    sink: ReplySink,
}

impl ReplyScheduler {
    pub fn new(handle: Handle, delay: Duration, sink: ReplySink) -> Self {
        Self {
            handle,
            delay,
            sink,
        }
    }

    pub fn schedule(&self, reply: AssistantReply) {
        let sink = Arc::clone(&self.sink);
        let delay = self.delay;
        tracing::trace!(turn = reply.turn, ?delay, "Reply scheduled");
        self.handle.spawn(async move {
            tokio::time::sleep(delay).await;
            sink(reply);
        });
    }
}
