use std::path::Path;

use crate::adapter::inbound::cli::output;
use crate::error::Result;
use crate::infrastructure::config::settings::{Config, BOT_TOKEN_VARS, DEFAULT_CONFIG_PATH};

/// Validate configuration without starting the bot.
///
/// Fails when the file is invalid or no bot token is set.
pub fn execute_config(config_path: Option<&Path>) -> Result<()> {
    let config = Config::load_or_default(config_path)?;

    output::section("Configuration Check");
    match config_path {
        Some(path) => output::field("Config", path.display()),
        None if Path::new(DEFAULT_CONFIG_PATH).exists() => {
            output::field("Config", DEFAULT_CONFIG_PATH);
        }
        None => output::field("Config", "defaults (no config.toml)"),
    }
    output::success("Configuration is valid");

    output::section("Summary");
    output::field("Market API", &config.market.base_url);
    output::field("RPC", &config.chain.rpc_url);
    output::field("Commitment", config.chain.commitment);
    output::field("Min length", config.telegram.min_address_len);
    output::field("Previews", config.telegram.link_preview);
    output::field("Log format", &config.logging.format);

    if let Err(err) = config.require_bot_token() {
        output::error(&format!(
            "Bot token not configured (set {} or {})",
            BOT_TOKEN_VARS[0], BOT_TOKEN_VARS[1]
        ));
        return Err(err);
    }
    output::success("Bot token detected");

    output::success("Configuration check complete");
    Ok(())
}
