//! Handler for the `lookup` command.
//!
//! Runs the same enrichment pipeline as the bot for one address and prints
//! the reply to stdout instead of sending it to a chat.

use std::sync::Arc;

use async_trait::async_trait;

use crate::adapter::inbound::cli::command::LookupArgs;
use crate::adapter::inbound::cli::output;
use crate::application::MessageOutcome;
use crate::domain::{ButtonAction, ChatId, OutboundMessage};
use crate::error::{Error, Result};
use crate::infrastructure::bootstrap;
use crate::infrastructure::config::settings::Config;
use crate::port::Messenger;

/// Chat id used for replies rendered locally.
const LOCAL_CHAT: ChatId = ChatId(0);

/// Shown when the reply was sent without mint metadata.
const DEGRADED_WARNING: &str = "Mint metadata unavailable; decimals and supply shown as N/A";

/// Messenger that prints replies instead of sending them.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutMessenger;

#[async_trait]
impl Messenger for StdoutMessenger {
    async fn send_message(&self, _chat: ChatId, message: OutboundMessage) -> Result<()> {
        output::message(&message.text);
        if let Some(keyboard) = message.keyboard.as_ref() {
            for button in keyboard.buttons() {
                match &button.action {
                    ButtonAction::Url(url) => output::field(&button.label, url),
                    ButtonAction::Callback(action) => output::field(&button.label, action),
                }
            }
        }
        Ok(())
    }

    async fn answer_callback(&self, _callback_id: &str, _text: Option<&str>) -> Result<()> {
        Ok(())
    }
}

/// Execute the lookup command.
pub async fn execute(args: &LookupArgs) -> Result<()> {
    let config = Config::load_or_default(args.config.as_deref())?;
    config.init_logging();

    let conversation = bootstrap::build_conversation(&config, Arc::new(StdoutMessenger));
    let outcome = conversation
        .handle_message(LOCAL_CHAT, Some(&args.address))
        .await;

    outcome_result(outcome, &args.address, config.telegram.min_address_len)
}

fn outcome_result(outcome: MessageOutcome, address: &str, min_len: usize) -> Result<()> {
    match outcome {
        MessageOutcome::Replied { degraded: false } | MessageOutcome::NotFound => Ok(()),
        MessageOutcome::Replied { degraded: true } => {
            output::warning(DEGRADED_WARNING);
            Ok(())
        }
        MessageOutcome::Ignored => Err(Error::InvalidInput(format!(
            "{address:?} is shorter than {min_len} characters"
        ))),
        MessageOutcome::Failed => Err(Error::Upstream(format!("lookup failed for {address}"))),
    }
}
