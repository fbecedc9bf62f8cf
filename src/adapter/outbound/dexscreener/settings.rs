//! DexScreener client configuration.

use serde::Deserialize;

pub const DEFAULT_BASE_URL: &str = "https://api.dexscreener.com";

/// Market data service settings (`[market]` section).
#[derive(Debug, Clone, Deserialize)]
pub struct DexScreenerConfig {
    /// API base URL without trailing path.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout in milliseconds. No timeout when unset.
    #[serde(default)]
    pub timeout_ms: Option<u64>,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Default for DexScreenerConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_ms: None,
        }
    }
}
