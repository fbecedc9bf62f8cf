//! Interaction flow for inline keyboard presses.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::{CallbackAction, CallbackEvent};
use crate::error::Result;
use crate::port::Messenger;

use super::format;

/// What the handler did with a callback query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallbackOutcome {
    /// The address was re-sent as copyable text.
    AddressSent,
    /// The press was acknowledged and nothing else happened.
    Acknowledged,
    /// Handling failed; details were logged.
    Failed,
}

/// Handles button presses on token info replies.
#[derive(Clone)]
pub struct CallbackHandler {
    messenger: Arc<dyn Messenger>,
}

impl CallbackHandler {
    #[must_use]
    pub fn new(messenger: Arc<dyn Messenger>) -> Self {
        Self { messenger }
    }

    /// Handle one callback query. Errors are logged, never propagated.
    pub async fn handle_callback(&self, event: CallbackEvent) -> CallbackOutcome {
        match self.dispatch(&event).await {
            Ok(outcome) => outcome,
            Err(e) => {
                warn!(callback_id = %event.id, error = %e, "Callback handler error");
                CallbackOutcome::Failed
            }
        }
    }

    async fn dispatch(&self, event: &CallbackEvent) -> Result<CallbackOutcome> {
        let action = event.data.as_deref().and_then(CallbackAction::decode);

        let Some(CallbackAction::CopyAddress(address)) = action else {
            debug!(callback_id = %event.id, data = ?event.data, "Unrecognized callback");
            self.messenger.answer_callback(&event.id, None).await?;
            return Ok(CallbackOutcome::Acknowledged);
        };

        // Acknowledge first so the button does not stay in a loading state.
        self.messenger
            .answer_callback(&event.id, Some(format::COPY_ACK_TEXT))
            .await?;

        let Some(chat) = event.chat else {
            warn!(callback_id = %event.id, "Callback message is no longer accessible");
            return Ok(CallbackOutcome::Acknowledged);
        };

        self.messenger
            .send_message(chat, format::copy_address_reply(&address))
            .await?;
        Ok(CallbackOutcome::AddressSent)
    }
}
