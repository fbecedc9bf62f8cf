//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct that aggregates all application settings.
//! Configuration is loaded from a TOML file with environment variable overrides
//! for the bot token and the RPC endpoint.
//!
//! # Example
//!
//! ```no_run
//! use mintscope::infrastructure::config::settings::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("config.toml")?;
//!     config.init_logging();
//!     Ok(())
//! }
//! ```

use serde::Deserialize;
use std::path::Path;

use super::logging::LoggingConfig;
use super::telegram::TelegramAppConfig;
use crate::adapter::outbound::dexscreener::DexScreenerConfig;
use crate::adapter::outbound::solana::SolanaRpcConfig;
use crate::error::{ConfigError, Result};

/// Config file consulted when no `--config` path is given.
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// Bot token variables, in lookup order.
pub const BOT_TOKEN_VARS: [&str; 2] = ["BOT_TOKEN", "TELEGRAM_BOT_TOKEN"];

/// Overrides `chain.rpc_url` when set.
pub const RPC_URL_VAR: &str = "RPC_URL";

/// Main application configuration.
///
/// Load from a TOML file using [`Config::load`] or parse directly with
/// [`Config::parse_toml`]. Every section is optional.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Logging and tracing configuration.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Telegram conversation settings.
    #[serde(default)]
    pub telegram: TelegramAppConfig,

    /// DexScreener market data endpoint.
    #[serde(default)]
    pub market: DexScreenerConfig,

    /// Solana JSON-RPC endpoint.
    #[serde(default)]
    pub chain: SolanaRpcConfig,

    /// Telegram bot token, loaded from the environment only.
    #[serde(skip)]
    pub bot_token: Option<String>,
}

impl Config {
    /// Parse configuration from TOML content.
    ///
    /// Applies `BOT_TOKEN`/`TELEGRAM_BOT_TOKEN` and `RPC_URL` from the
    /// process environment, then validates.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML content is malformed or validation fails.
    #[allow(clippy::result_large_err)]
    pub fn parse_toml(content: &str) -> Result<Self> {
        Self::parse_toml_with_env(content, |key| std::env::var(key).ok())
    }

    /// Parse configuration from TOML content with an explicit environment.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML content is malformed or validation fails.
    #[allow(clippy::result_large_err)]
    pub fn parse_toml_with_env<F>(content: &str, env: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.apply_env(env);
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read
    /// - The TOML content is malformed
    /// - Validation fails
    #[allow(clippy::result_large_err)]
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Load from `path` when given, otherwise from [`DEFAULT_CONFIG_PATH`].
    ///
    /// A missing default file yields the built-in defaults; a missing
    /// explicit file is an error.
    ///
    /// # Errors
    ///
    /// Same as [`Config::load`].
    #[allow(clippy::result_large_err)]
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None if Path::new(DEFAULT_CONFIG_PATH).exists() => Self::load(DEFAULT_CONFIG_PATH),
            None => Self::parse_toml(""),
        }
    }

    fn apply_env<F>(&mut self, env: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        self.bot_token = BOT_TOKEN_VARS
            .iter()
            .filter_map(|key| env(key))
            .map(|value| value.trim().to_string())
            .find(|value| !value.is_empty());

        if let Some(rpc_url) = env(RPC_URL_VAR).filter(|v| !v.trim().is_empty()) {
            self.chain.rpc_url = rpc_url.trim().to_string();
        }
    }

    /// Validate configuration values.
    #[allow(clippy::result_large_err)]
    fn validate(&self) -> Result<()> {
        if !matches!(self.logging.format.as_str(), "pretty" | "json") {
            return Err(ConfigError::InvalidValue {
                field: "logging.format",
                reason: format!("expected \"pretty\" or \"json\", got {:?}", self.logging.format),
            }
            .into());
        }
        if self.telegram.min_address_len == 0 {
            return Err(ConfigError::InvalidValue {
                field: "min_address_len",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }

        validate_url("market.base_url", &self.market.base_url)?;
        validate_url("chain.rpc_url", &self.chain.rpc_url)?;
        validate_timeout("market.timeout_ms", self.market.timeout_ms)?;
        validate_timeout("chain.timeout_ms", self.chain.timeout_ms)?;

        Ok(())
    }

    /// The bot token, or an error naming the variable to set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingField`] when no token was found.
    #[allow(clippy::result_large_err)]
    pub fn require_bot_token(&self) -> Result<&str> {
        self.bot_token.as_deref().ok_or_else(|| {
            ConfigError::MissingField {
                field: BOT_TOKEN_VARS[0],
            }
            .into()
        })
    }

    /// Initialize logging with the configured settings.
    pub fn init_logging(&self) {
        self.logging.init();
    }
}

#[allow(clippy::result_large_err)]
fn validate_url(field: &'static str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ConfigError::MissingField { field }.into());
    }
    url::Url::parse(value).map_err(|e| ConfigError::InvalidValue {
        field,
        reason: e.to_string(),
    })?;
    Ok(())
}

#[allow(clippy::result_large_err)]
fn validate_timeout(field: &'static str, value: Option<u64>) -> Result<()> {
    if value == Some(0) {
        return Err(ConfigError::InvalidValue {
            field,
            reason: "must be greater than 0".to_string(),
        }
        .into());
    }
    Ok(())
}
