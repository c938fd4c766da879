//! Deferred delivery of assistant replies
//!
//! Each scheduled reply is a tokio task that sleeps for the reply delay and
//! then sends the [`PendingReply`] to the UI event loop. The loop applies it
//! with [`crate::Conversation::complete_reply`], so every reply is built from
//! the conversation as it is at delivery time.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::conversation::PendingReply;

pub struct ReplyScheduler {
    delay: Duration,
    tx: mpsc::UnboundedSender<PendingReply>,
    tasks: Vec<JoinHandle<()>>,
}

impl ReplyScheduler {
    pub fn new(delay: Duration, tx: mpsc::UnboundedSender<PendingReply>) -> Self {
        Self {
            delay,
            tx,
            tasks: Vec::new(),
        }
    }

    /// Deliver `reply` after the delay. Must be called inside a tokio runtime.
    pub fn schedule(&mut self, reply: PendingReply) {
        self.tasks.retain(|task| !task.is_finished());

        let delay = self.delay;
        let tx = self.tx.clone();
        tracing::debug!(delay = ?delay, "reply scheduled");

        self.tasks.push(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // Receiver gone means the UI has shut down
            let _ = tx.send(reply);
        }));
    }

    /// Abort every reply that has not been delivered yet
    pub fn cancel_all(&mut self) {
        let cancelled = self.tasks.len();
        for task in self.tasks.drain(..) {
            task.abort();
        }
        if cancelled > 0 {
            tracing::debug!(cancelled, "pending replies cancelled");
        }
    }

    /// Number of scheduled replies still waiting to be sent
    pub fn outstanding(&self) -> usize {
        self.tasks.iter().filter(|task| !task.is_finished()).count()
    }
}

impl Drop for ReplyScheduler {
    fn drop(&mut self) {
        self.cancel_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conversation::{Conversation, DEFAULT_REPLY_DELAY};
    use tokio::time::Instant;

    #[tokio::test(start_paused = true)]
    async fn test_reply_delivered_after_delay() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut scheduler = ReplyScheduler::new(DEFAULT_REPLY_DELAY, tx);
        let mut conversation = Conversation::default();
        conversation.initialize();

        let start = Instant::now();
        let pending = conversation.submit_user_text("hello").unwrap();
        assert!(conversation.is_typing());
        assert_eq!(
            conversation.current_state().last_message().unwrap().content,
            "hello"
        );

        scheduler.schedule(pending);
        let reply = rx.recv().await.unwrap();
        assert!(start.elapsed() >= DEFAULT_REPLY_DELAY);

        conversation.complete_reply(reply);
        let state = conversation.current_state();
        let last = state.last_message().unwrap();
        assert!(!last.is_user());
        assert_eq!(last.content, conversation.responder().resolve("hello"));
        assert!(!state.is_typing);
    }

    #[tokio::test(start_paused = true)]
    async fn test_nothing_delivered_before_delay() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut scheduler = ReplyScheduler::new(Duration::from_millis(1500), tx);
        scheduler.schedule(PendingReply {
            session: 1,
            prompt: "hello".to_string(),
        });

        tokio::time::sleep(Duration::from_millis(1000)).await;
        assert!(rx.try_recv().is_err());
        assert_eq!(scheduler.outstanding(), 1);

        tokio::time::sleep(Duration::from_millis(600)).await;
        assert!(rx.try_recv().is_ok());
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_all_drops_pending_replies() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut scheduler = ReplyScheduler::new(Duration::from_millis(1500), tx);
        scheduler.schedule(PendingReply {
            session: 1,
            prompt: "hello".to_string(),
        });
        scheduler.cancel_all();

        tokio::time::sleep(Duration::from_secs(5)).await;
        assert!(rx.try_recv().is_err());
        assert_eq!(scheduler.outstanding(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_cancels() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        {
            let mut scheduler = ReplyScheduler::new(Duration::from_millis(10), tx);
            scheduler.schedule(PendingReply {
                session: 1,
                prompt: "tips".to_string(),
            });
        }

        // Sender dropped with the scheduler and its aborted task
        assert!(rx.recv().await.is_none());
    }
}
