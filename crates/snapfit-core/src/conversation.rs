//! Coach conversation model
//!
//! Owns the message list and the typing flag. Submitting text appends the user
//! message right away and hands back a [`PendingReply`]; the caller decides
//! when the reply is due (see [`crate::ReplyScheduler`]) and feeds it back
//! through [`Conversation::complete_reply`].

use std::time::Duration;

use crate::responder::Responder;
use crate::seed;
use crate::state::{ChatMessage, ConversationState};

/// Simulated thinking time before the assistant answers
pub const DEFAULT_REPLY_DELAY: Duration = Duration::from_millis(1500);

/// An assistant reply that has been promised but not yet appended
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingReply {
    /// Session the reply belongs to; replies from older sessions are dropped
    pub session: u64,
    /// The user text the reply answers
    pub prompt: String,
}

#[derive(Debug, Clone, Default)]
pub struct Conversation {
    state: ConversationState,
    responder: Responder,
    session: u64,
    outstanding: usize,
}

impl Conversation {
    /// Start a fresh session holding only the greeting.
    ///
    /// Replies still in flight from the previous session are ignored when
    /// they come back.
    pub fn initialize(&mut self) {
        self.session += 1;
        self.outstanding = 0;
        self.state = ConversationState {
            messages: vec![ChatMessage::assistant(seed::GREETING)],
            is_typing: false,
        };
        tracing::debug!(session = self.session, "conversation initialized");
    }

    /// Append the user's message and promise a reply.
    ///
    /// Blank input is ignored and yields `None`.
    pub fn submit_user_text(&mut self, text: &str) -> Option<PendingReply> {
        if text.trim().is_empty() {
            return None;
        }

        self.state.messages.push(ChatMessage::user(text));
        self.outstanding += 1;
        self.state.is_typing = true;

        tracing::debug!(
            session = self.session,
            outstanding = self.outstanding,
            "user message submitted"
        );

        Some(PendingReply {
            session: self.session,
            prompt: text.to_string(),
        })
    }

    /// Append the assistant's answer for a reply that has come due.
    ///
    /// The answer is appended to the messages as they are now, not as they
    /// were when the reply was promised. Returns the appended message, or
    /// `None` when the reply belongs to an earlier session.
    pub fn complete_reply(&mut self, reply: PendingReply) -> Option<&ChatMessage> {
        if reply.session != self.session || self.outstanding == 0 {
            tracing::debug!(
                reply_session = reply.session,
                session = self.session,
                "dropping stale reply"
            );
            return None;
        }

        let content = self.responder.resolve(&reply.prompt);
        self.outstanding -= 1;
        self.state.is_typing = self.outstanding > 0;
        self.state.messages.push(ChatMessage::assistant(content));
        self.state.messages.last()
    }

    /// Current snapshot for rendering
    pub fn current_state(&self) -> &ConversationState {
        &self.state
    }

    pub fn responder(&self) -> &Responder {
        &self.responder
    }

    pub fn is_typing(&self) -> bool {
        self.state.is_typing
    }

    /// Quick replies are offered until the user has had one exchange
    pub fn shows_templates(&self) -> bool {
        self.state.messages.len() <= 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::ChatRole;

    fn started() -> Conversation {
        let mut conversation = Conversation::default();
        conversation.initialize();
        conversation
    }

    #[test]
    fn test_initialize_greets() {
        let conversation = started();
        let state = conversation.current_state();
        assert_eq!(state.messages.len(), 1);
        assert_eq!(state.messages[0].role, ChatRole::Assistant);
        assert_eq!(state.messages[0].content, seed::GREETING);
        assert!(!state.is_typing);
    }

    #[test]
    fn test_blank_input_is_ignored() {
        let mut conversation = started();
        assert!(conversation.submit_user_text("").is_none());
        assert!(conversation.submit_user_text("   \t\n").is_none());
        assert_eq!(conversation.current_state().messages.len(), 1);
        assert!(!conversation.is_typing());
    }

    #[test]
    fn test_submit_then_complete() {
        let mut conversation = started();
        let pending = conversation.submit_user_text("hello").unwrap();

        let state = conversation.current_state();
        let last = state.last_message().unwrap();
        assert!(last.is_user());
        assert_eq!(last.content, "hello");
        assert!(state.is_typing);

        conversation.complete_reply(pending);
        let state = conversation.current_state();
        let last = state.last_message().unwrap();
        assert!(!last.is_user());
        assert_eq!(last.content, conversation.responder().resolve("hello"));
        assert!(!state.is_typing);
    }

    #[test]
    fn test_user_text_kept_verbatim() {
        let mut conversation = started();
        let pending = conversation.submit_user_text("Hello There").unwrap();
        assert_eq!(conversation.current_state().messages[1].content, "Hello There");
        assert_eq!(pending.prompt, "Hello There");
    }

    #[test]
    fn test_overlapping_replies_append_to_current_messages() {
        let mut conversation = started();
        let first = conversation.submit_user_text("hello").unwrap();
        let second = conversation.submit_user_text("give me tips").unwrap();

        conversation.complete_reply(first);
        assert!(conversation.is_typing());
        conversation.complete_reply(second);
        assert!(!conversation.is_typing());

        let responder = conversation.responder().clone();
        let contents: Vec<&str> = conversation
            .current_state()
            .messages
            .iter()
            .map(|m| m.content.as_str())
            .collect();
        assert_eq!(contents.len(), 5);
        assert_eq!(contents[1], "hello");
        assert_eq!(contents[2], "give me tips");
        assert_eq!(contents[3], responder.resolve("hello"));
        assert_eq!(contents[4], responder.resolve("give me tips"));
    }

    #[test]
    fn test_reply_from_previous_session_is_dropped() {
        let mut conversation = started();
        let pending = conversation.submit_user_text("hello").unwrap();

        conversation.initialize();
        assert!(conversation.complete_reply(pending).is_none());
        assert_eq!(conversation.current_state().messages.len(), 1);
        assert!(!conversation.is_typing());
    }

    #[test]
    fn test_templates_shown_for_first_exchange_only() {
        let mut conversation = started();
        assert!(conversation.shows_templates());

        let pending = conversation.submit_user_text("hello").unwrap();
        assert!(conversation.shows_templates());

        conversation.complete_reply(pending);
        assert!(!conversation.shows_templates());
    }
}
