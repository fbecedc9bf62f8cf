//! Messenger port for chat replies.

use async_trait::async_trait;

use crate::domain::{ChatId, OutboundMessage};
use crate::error::Result;

/// Outbound chat actions used by the handlers.
#[async_trait]
pub trait Messenger: Send + Sync {
    /// Send a message to a chat.
    async fn send_message(&self, chat: ChatId, message: OutboundMessage) -> Result<()>;

    /// Acknowledge a callback query, optionally showing a short toast.
    async fn answer_callback(&self, callback_id: &str, text: Option<&str>) -> Result<()>;
}
