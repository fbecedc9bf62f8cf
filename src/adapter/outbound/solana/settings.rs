//! Solana RPC client configuration.

use serde::Deserialize;

pub const DEFAULT_RPC_URL: &str = "https://api.mainnet-beta.solana.com";

/// Bank state commitment level requested from the node.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Commitment {
    Processed,
    #[default]
    Confirmed,
    Finalized,
}

impl Commitment {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Processed => "processed",
            Self::Confirmed => "confirmed",
            Self::Finalized => "finalized",
        }
    }
}

impl std::fmt::Display for Commitment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Chain metadata settings (`[chain]` section).
#[derive(Debug, Clone, Deserialize)]
pub struct SolanaRpcConfig {
    /// JSON-RPC endpoint. Overridden by the `RPC_URL` environment variable.
    #[serde(default = "default_rpc_url")]
    pub rpc_url: String,
    #[serde(default)]
    pub commitment: Commitment,
    /// Request timeout in milliseconds. No timeout when unset.
    #[serde(default)]
    pub timeout_ms: Option<u64>,
}

fn default_rpc_url() -> String {
    DEFAULT_RPC_URL.to_string()
}

impl Default for SolanaRpcConfig {
    fn default() -> Self {
        Self {
            rpc_url: default_rpc_url(),
            commitment: Commitment::default(),
            timeout_ms: None,
        }
    }
}
