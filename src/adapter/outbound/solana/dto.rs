//! Solana JSON-RPC request and response types.

use serde::{Deserialize, Serialize};

use super::settings::Commitment;

/// JSON-RPC 2.0 request envelope.
#[derive(Debug, Clone, Serialize)]
pub struct RpcRequest {
    pub jsonrpc: &'static str,
    pub id: u64,
    pub method: &'static str,
    pub params: serde_json::Value,
}

impl RpcRequest {
    /// `getAccountInfo` with `jsonParsed` encoding.
    #[must_use]
    pub fn get_account_info(pubkey: &str, commitment: Commitment) -> Self {
        Self {
            jsonrpc: "2.0",
            id: 1,
            method: "getAccountInfo",
            params: serde_json::json!([
                pubkey,
                { "encoding": "jsonParsed", "commitment": commitment.as_str() }
            ]),
        }
    }
}

/// JSON-RPC 2.0 response envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct RpcResponse<T> {
    pub result: Option<T>,
    #[serde(default)]
    pub error: Option<RpcError>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RpcError {
    pub code: i64,
    pub message: String,
}

impl std::fmt::Display for RpcError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.message, self.code)
    }
}

/// `getAccountInfo` result: the account is `null` when it does not exist.
#[derive(Debug, Clone, Deserialize)]
pub struct AccountInfoResult {
    #[serde(default)]
    pub value: Option<AccountInfo>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AccountInfo {
    pub data: AccountData,
    #[serde(default)]
    pub owner: Option<String>,
}

/// Account data is an object for parsable accounts and a
/// `[payload, encoding]` array otherwise.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum AccountData {
    Parsed {
        parsed: ParsedAccount,
        #[serde(default)]
        program: Option<String>,
    },
    Raw(serde_json::Value),
}

#[derive(Debug, Clone, Deserialize)]
pub struct ParsedAccount {
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub info: serde_json::Value,
}

/// Parsed SPL token mint fields.
#[derive(Debug, Clone, Deserialize)]
pub struct MintInfo {
    #[serde(default)]
    pub decimals: Option<u8>,
    /// Raw supply in base units, encoded as a decimal string.
    #[serde(default)]
    pub supply: Option<String>,
}

impl AccountInfo {
    /// Mint fields if this account was parsed as a token mint.
    #[must_use]
    pub fn mint_info(&self) -> Option<MintInfo> {
        match &self.data {
            AccountData::Parsed { parsed, .. } if parsed.kind.as_deref() == Some("mint") => {
                serde_json::from_value(parsed.info.clone()).ok()
            }
            _ => None,
        }
    }
}
