//! Message flow: address text in, one token info reply out.

use std::sync::Arc;

use tracing::{debug, error, info, warn};

use crate::domain::{CandidateAddress, ChatId, MintLookup, PairLookup};
use crate::error::Result;
use crate::port::{MarketDataSource, Messenger, MintMetadataSource};

use super::format::{self, FormatOptions};

/// Settings for the conversation handler.
#[derive(Debug, Clone, Copy)]
pub struct ConversationConfig {
    /// Minimum trimmed length for text to be treated as an address.
    pub min_address_len: usize,
    /// Reply formatting options.
    pub format: FormatOptions,
}

impl Default for ConversationConfig {
    fn default() -> Self {
        Self {
            min_address_len: crate::domain::DEFAULT_MIN_ADDRESS_LEN,
            format: FormatOptions::default(),
        }
    }
}

/// What the handler did with an inbound message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageOutcome {
    /// Text did not look like an address; nothing was sent.
    Ignored,
    /// No pairs were found and the not-found reply was sent.
    NotFound,
    /// Token info was sent. `degraded` is set when mint metadata was unavailable.
    Replied { degraded: bool },
    /// An unexpected failure occurred and the generic error reply was attempted.
    Failed,
}

/// Orchestrates market lookup, mint lookup, formatting and reply.
#[derive(Clone)]
pub struct ConversationHandler {
    market: Arc<dyn MarketDataSource>,
    chain: Arc<dyn MintMetadataSource>,
    messenger: Arc<dyn Messenger>,
    config: ConversationConfig,
}

impl ConversationHandler {
    #[must_use]
    pub fn new(
        market: Arc<dyn MarketDataSource>,
        chain: Arc<dyn MintMetadataSource>,
        messenger: Arc<dyn Messenger>,
        config: ConversationConfig,
    ) -> Self {
        Self {
            market,
            chain,
            messenger,
            config,
        }
    }

    /// Handle one inbound chat message.
    ///
    /// Sends exactly one reply for text that passes the address heuristic and
    /// nothing otherwise. Failures are logged and answered with a generic
    /// message; they never propagate.
    pub async fn handle_message(&self, chat: ChatId, text: Option<&str>) -> MessageOutcome {
        let Some(address) = CandidateAddress::from_text(text, self.config.min_address_len) else {
            return MessageOutcome::Ignored;
        };

        match self.reply_with_token_info(chat, &address).await {
            Ok(outcome) => outcome,
            Err(e) => {
                error!(chat_id = chat.0, address = %address, error = %e, "Token lookup failed");
                if let Err(e) = self.messenger.send_message(chat, format::error_reply()).await {
                    error!(chat_id = chat.0, error = %e, "Failed to send error reply");
                }
                MessageOutcome::Failed
            }
        }
    }

    async fn reply_with_token_info(
        &self,
        chat: ChatId,
        address: &CandidateAddress,
    ) -> Result<MessageOutcome> {
        debug!(chat_id = chat.0, address = %address, source = self.market.source_name(), "Looking up token");

        let pair = match self.market.lookup_pair(address).await? {
            PairLookup::Found(pair) => pair,
            PairLookup::NotFound => {
                info!(chat_id = chat.0, address = %address, "No token data found");
                self.messenger
                    .send_message(chat, format::not_found_reply())
                    .await?;
                return Ok(MessageOutcome::NotFound);
            }
        };

        let mint = self.chain.mint_metadata(address).await;
        let degraded = match &mint {
            MintLookup::Found(_) => false,
            MintLookup::Unavailable(reason) => {
                warn!(address = %address, reason = %reason, "Could not fetch decimals/supply");
                true
            }
        };

        let reply = format::token_reply(address, &pair, &mint, self.config.format);
        self.messenger.send_message(chat, reply).await?;

        info!(chat_id = chat.0, address = %address, degraded, "Token info sent");
        Ok(MessageOutcome::Replied { degraded })
    }
}
