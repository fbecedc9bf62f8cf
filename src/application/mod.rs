//! Application layer: the message and callback flows plus reply formatting.

pub mod callback;
pub mod conversation;
pub mod format;

pub use callback::{CallbackHandler, CallbackOutcome};
pub use conversation::{ConversationConfig, ConversationHandler, MessageOutcome};
