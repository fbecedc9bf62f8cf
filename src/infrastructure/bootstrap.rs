//! Infrastructure bootstrap helpers for runtime wiring.

use std::sync::Arc;

use teloxide::Bot;
use tracing::info;

use crate::adapter::inbound::telegram::BotHandlers;
use crate::adapter::outbound::dexscreener::DexScreenerClient;
use crate::adapter::outbound::solana::SolanaRpcClient;
use crate::adapter::outbound::telegram::TelegramMessenger;
use crate::application::format::FormatOptions;
use crate::application::{CallbackHandler, ConversationConfig, ConversationHandler};
use crate::infrastructure::config::settings::Config;
use crate::port::{MarketDataSource, Messenger, MintMetadataSource};

/// Conversation settings derived from configuration.
#[must_use]
pub fn conversation_config(config: &Config) -> ConversationConfig {
    ConversationConfig {
        min_address_len: config.telegram.min_address_len,
        format: FormatOptions {
            link_preview: config.telegram.link_preview,
        },
    }
}

/// Build the market data client from configuration.
#[must_use]
pub fn build_market_source(config: &Config) -> Arc<dyn MarketDataSource> {
    let client = DexScreenerClient::from_config(&config.market);
    info!(base_url = %config.market.base_url, "Market data source configured");
    Arc::new(client)
}

/// Build the chain metadata client from configuration.
#[must_use]
pub fn build_mint_source(config: &Config) -> Arc<dyn MintMetadataSource> {
    let client = SolanaRpcClient::from_config(&config.chain);
    info!(
        rpc_url = %client.rpc_url(),
        commitment = %config.chain.commitment,
        "Chain metadata source configured"
    );
    Arc::new(client)
}

/// Build the conversation handler around an arbitrary messenger.
#[must_use]
pub fn build_conversation(config: &Config, messenger: Arc<dyn Messenger>) -> ConversationHandler {
    ConversationHandler::new(
        build_market_source(config),
        build_mint_source(config),
        messenger,
        conversation_config(config),
    )
}

/// Build both Telegram flows sharing one bot client.
#[must_use]
pub fn build_bot_handlers(config: &Config, bot: Bot) -> BotHandlers {
    let messenger: Arc<dyn Messenger> = Arc::new(TelegramMessenger::new(bot));
    BotHandlers {
        conversation: Arc::new(build_conversation(config, Arc::clone(&messenger))),
        callback: Arc::new(CallbackHandler::new(messenger)),
    }
}
