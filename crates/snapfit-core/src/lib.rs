pub mod config;
pub mod conversation;
pub mod error;
pub mod parser;
pub mod responder;
pub mod scheduler;
pub mod seed;
pub mod state;
pub mod workout;

// Re-export main types for convenience
pub use config::Config;
pub use conversation::{Conversation, PendingReply, DEFAULT_REPLY_DELAY};
pub use error::{ParseError, WorkoutError};
pub use parser::{parse_workouts, try_parse_workouts};
pub use responder::{KeywordReply, Responder};
pub use scheduler::ReplyScheduler;
pub use state::{ChatMessage, ChatRole, ConversationState};
pub use workout::{Exercise, WorkoutCollection, WorkoutGroup, WorkoutTracker};
