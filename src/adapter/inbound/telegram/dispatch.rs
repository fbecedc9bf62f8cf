//! Teloxide dispatcher wiring for inbound updates.
//!
//! Messages go to the [`ConversationHandler`], callback queries to the
//! [`CallbackHandler`]. Each update is handled independently by teloxide's
//! dispatcher; the handlers never return errors to it.

use std::sync::Arc;

use teloxide::dispatching::UpdateHandler;
use teloxide::prelude::*;
use tracing::{debug, info};

use crate::application::{CallbackHandler, ConversationHandler};
use crate::domain::{CallbackEvent, ChatId};

/// Both flows, shared across dispatcher tasks.
#[derive(Clone)]
pub struct BotHandlers {
    pub conversation: Arc<ConversationHandler>,
    pub callback: Arc<CallbackHandler>,
}

/// Build the update handler tree.
#[must_use]
pub fn schema() -> UpdateHandler<teloxide::RequestError> {
    dptree::entry()
        .branch(Update::filter_message().endpoint(on_message))
        .branch(Update::filter_callback_query().endpoint(on_callback_query))
}

/// Run the long-polling dispatcher until Ctrl-C.
pub async fn run_dispatcher(bot: Bot, handlers: BotHandlers) {
    info!("Telegram dispatcher started");

    Dispatcher::builder(bot, schema())
        .dependencies(dptree::deps![handlers])
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    info!("Telegram dispatcher stopped");
}

async fn on_message(msg: Message, handlers: BotHandlers) -> ResponseResult<()> {
    let outcome = handlers
        .conversation
        .handle_message(ChatId(msg.chat.id.0), msg.text())
        .await;
    debug!(chat_id = msg.chat.id.0, outcome = ?outcome, "Message handled");
    Ok(())
}

async fn on_callback_query(query: CallbackQuery, handlers: BotHandlers) -> ResponseResult<()> {
    let outcome = handlers.callback.handle_callback(callback_event(query)).await;
    debug!(outcome = ?outcome, "Callback handled");
    Ok(())
}

/// Extract the fields the callback flow consumes.
#[must_use]
pub fn callback_event(query: CallbackQuery) -> CallbackEvent {
    CallbackEvent {
        chat: query.message.as_ref().map(|m| ChatId(m.chat().id.0)),
        id: query.id,
        data: query.data,
    }
}
