//! Handler for the `run` command.

use std::path::Path;

use teloxide::Bot;
use tracing::info;

use crate::adapter::inbound::cli::output;
use crate::adapter::inbound::telegram::run_dispatcher;
use crate::error::Result;
use crate::infrastructure::bootstrap;
use crate::infrastructure::config::settings::Config;

/// Execute the run command: start long polling until Ctrl-C.
pub async fn execute(config_path: Option<&Path>) -> Result<()> {
    let config = Config::load_or_default(config_path)?;
    config.init_logging();

    let token = config.require_bot_token()?;

    output::header(env!("CARGO_PKG_VERSION"));
    output::field("Market API", &config.market.base_url);
    output::field("RPC", &config.chain.rpc_url);
    output::field("Commitment", config.chain.commitment);

    let bot = Bot::new(token);
    let handlers = bootstrap::build_bot_handlers(&config, bot.clone());

    info!(
        min_address_len = config.telegram.min_address_len,
        link_preview = config.telegram.link_preview,
        "mintscope starting"
    );
    run_dispatcher(bot, handlers).await;
    info!("mintscope stopped");

    Ok(())
}
