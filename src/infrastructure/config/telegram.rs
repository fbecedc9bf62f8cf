//! Telegram bot configuration.

use serde::Deserialize;

use crate::domain::DEFAULT_MIN_ADDRESS_LEN;

const fn default_true() -> bool {
    true
}

const fn default_min_address_len() -> usize {
    DEFAULT_MIN_ADDRESS_LEN
}

/// Telegram bot configuration (`[telegram]` section).
///
/// The bot token is never read from the file; it comes from `BOT_TOKEN`.
#[derive(Debug, Clone, Deserialize)]
pub struct TelegramAppConfig {
    /// Minimum trimmed message length treated as an address (default: 30).
    #[serde(default = "default_min_address_len")]
    pub min_address_len: usize,
    /// Render link previews on token replies (default: true).
    #[serde(default = "default_true")]
    pub link_preview: bool,
}

impl Default for TelegramAppConfig {
    fn default() -> Self {
        Self {
            min_address_len: default_min_address_len(),
            link_preview: default_true(),
        }
    }
}
