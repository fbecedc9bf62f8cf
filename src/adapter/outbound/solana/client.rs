//! Solana JSON-RPC client for mint metadata.
//!
//! Issues a single `getAccountInfo` call with `jsonParsed` encoding and reads
//! the SPL mint's decimals and supply. Every expected failure is turned into
//! [`MintLookup::Unavailable`] so callers can degrade without error handling.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client as HttpClient;
use tracing::{debug, warn};

use super::dto::{AccountInfoResult, RpcRequest, RpcResponse};
use super::settings::{Commitment, SolanaRpcConfig};
use crate::domain::{CandidateAddress, MintLookup, MintMetadata, UnavailableReason};
use crate::port::MintMetadataSource;

/// Length in bytes of an ed25519 public key.
const PUBKEY_LEN: usize = 32;

/// HTTP client for a Solana JSON-RPC node.
pub struct SolanaRpcClient {
    http: HttpClient,
    rpc_url: String,
    commitment: Commitment,
}

impl SolanaRpcClient {
    #[must_use]
    pub fn new(rpc_url: impl Into<String>) -> Self {
        Self {
            http: HttpClient::new(),
            rpc_url: rpc_url.into(),
            commitment: Commitment::default(),
        }
    }

    #[must_use]
    pub fn from_config(config: &SolanaRpcConfig) -> Self {
        let mut builder = HttpClient::builder();
        if let Some(timeout_ms) = config.timeout_ms {
            builder = builder.timeout(Duration::from_millis(timeout_ms));
        }
        let http = builder.build().unwrap_or_else(|err| {
            warn!(error = %err, "Failed to build HTTP client, using defaults");
            HttpClient::new()
        });

        Self {
            http,
            rpc_url: config.rpc_url.clone(),
            commitment: config.commitment,
        }
    }

    #[must_use]
    pub fn rpc_url(&self) -> &str {
        &self.rpc_url
    }

    async fn get_account_info(
        &self,
        pubkey: &str,
    ) -> Result<RpcResponse<AccountInfoResult>, UnavailableReason> {
        let request = RpcRequest::get_account_info(pubkey, self.commitment);
        let response = self
            .http
            .post(&self.rpc_url)
            .json(&request)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(|e| UnavailableReason::Transport(e.to_string()))?;

        let body = response
            .bytes()
            .await
            .map_err(|e| UnavailableReason::Transport(e.to_string()))?;
        serde_json::from_slice(&body).map_err(|e| UnavailableReason::Malformed(e.to_string()))
    }

    async fn lookup(&self, address: &CandidateAddress) -> Result<MintMetadata, UnavailableReason> {
        if !is_valid_pubkey(address.as_str()) {
            return Err(UnavailableReason::InvalidAddress);
        }

        let response = self.get_account_info(address.as_str()).await?;
        if let Some(error) = response.error {
            return Err(UnavailableReason::Rpc(error.to_string()));
        }

        let account = response
            .result
            .and_then(|r| r.value)
            .ok_or(UnavailableReason::NotAMint)?;
        let mint = account.mint_info().ok_or(UnavailableReason::NotAMint)?;

        Ok(mint_metadata(mint.decimals, mint.supply.as_deref()))
    }
}

/// Whether `address` is base58 and decodes to a 32-byte public key.
#[must_use]
pub fn is_valid_pubkey(address: &str) -> bool {
    bs58::decode(address)
        .into_vec()
        .map(|bytes| bytes.len() == PUBKEY_LEN)
        .unwrap_or(false)
}

/// Combine parsed mint fields into scaled metadata.
///
/// A missing raw supply counts as zero; an unparsable one leaves the supply
/// unavailable while keeping the decimals.
fn mint_metadata(decimals: Option<u8>, raw_supply: Option<&str>) -> MintMetadata {
    match raw_supply.map(str::parse::<u64>) {
        None => MintMetadata::from_raw(decimals, 0),
        Some(Ok(raw)) => MintMetadata::from_raw(decimals, raw),
        Some(Err(e)) => {
            debug!(error = %e, "Unparsable mint supply");
            MintMetadata {
                decimals,
                supply: None,
            }
        }
    }
}

#[async_trait]
impl MintMetadataSource for SolanaRpcClient {
    async fn mint_metadata(&self, address: &CandidateAddress) -> MintLookup {
        match self.lookup(address).await {
            Ok(metadata) => {
                debug!(address = %address, decimals = ?metadata.decimals, "Resolved mint metadata");
                MintLookup::Found(metadata)
            }
            Err(reason) => MintLookup::Unavailable(reason),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::outbound::test_server::{closed_base_url, serve_once};
    use rust_decimal_macros::dec;

    const USDC: &str = "EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v";

    async fn lookup_against(status: u16, body: &'static str) -> MintLookup {
        let server = serve_once(status, body).await;
        let client = SolanaRpcClient::new(server.base_url.clone());
        client.mint_metadata(&CandidateAddress::new(USDC)).await
    }

    #[test]
    fn test_is_valid_pubkey() {
        assert!(is_valid_pubkey("EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v"));
        assert!(is_valid_pubkey("So11111111111111111111111111111111111111112"));
        // '0', 'O', 'I' and 'l' are not in the base58 alphabet.
        assert!(!is_valid_pubkey("0OIl0OIl0OIl0OIl0OIl0OIl0OIl0OIl"));
        // Valid base58 but too short for a public key.
        assert!(!is_valid_pubkey("3mJr7AoUXx2Wqd"));
        assert!(!is_valid_pubkey(""));
    }

    #[test]
    fn test_mint_metadata_scaling() {
        let metadata = mint_metadata(Some(6), Some("5000000000000"));
        assert_eq!(metadata.decimals, Some(6));
        assert_eq!(metadata.supply, Some(dec!(5000000)));
    }

    #[test]
    fn test_mint_metadata_missing_supply_is_zero() {
        let metadata = mint_metadata(Some(9), None);
        assert_eq!(metadata.supply, Some(dec!(0)));
    }

    #[test]
    fn test_mint_metadata_unparsable_supply() {
        let metadata = mint_metadata(Some(9), Some("lots"));
        assert_eq!(metadata.decimals, Some(9));
        assert_eq!(metadata.supply, None);
    }

    #[tokio::test]
    async fn test_invalid_address_fails_fast_without_rpc() {
        // Unroutable endpoint: reaching the network would surface as Transport.
        let client = SolanaRpcClient::new("http://127.0.0.1:9");
        let lookup = client
            .mint_metadata(&CandidateAddress::new("not a base58 public key at all!!"))
            .await;
        assert_eq!(
            lookup,
            MintLookup::Unavailable(UnavailableReason::InvalidAddress)
        );
    }

    #[test]
    fn test_from_config() {
        let config = SolanaRpcConfig {
            rpc_url: "http://localhost:8899".into(),
            commitment: Commitment::Finalized,
            timeout_ms: Some(1_000),
        };
        let client = SolanaRpcClient::from_config(&config);
        assert_eq!(client.rpc_url(), "http://localhost:8899");
        assert_eq!(client.commitment, Commitment::Finalized);
    }

    #[tokio::test]
    async fn test_lookup_parsed_mint() {
        let server = serve_once(
            200,
            r#"{"jsonrpc":"2.0","id":1,"result":{"context":{"slot":1},"value":{"data":{"parsed":{"type":"mint","info":{"decimals":6,"supply":"5000000000000","isInitialized":true}},"program":"spl-token","space":82},"executable":false,"lamports":1461600,"owner":"TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA"}}}"#,
        )
        .await;
        let client = SolanaRpcClient::new(server.base_url.clone());

        let lookup = client.mint_metadata(&CandidateAddress::new(USDC)).await;

        assert_eq!(
            lookup,
            MintLookup::Found(MintMetadata {
                decimals: Some(6),
                supply: Some(dec!(5000000)),
            })
        );
        let request = server.request().await;
        assert!(request.starts_with("POST / HTTP/1.1"));
        assert!(request.contains("getAccountInfo"));
        assert!(request.contains("jsonParsed"));
        assert!(request.contains(USDC));
    }

    #[tokio::test]
    async fn test_lookup_server_error_is_transport() {
        let lookup = lookup_against(500, r#"{"error":"boom"}"#).await;
        assert!(matches!(
            lookup,
            MintLookup::Unavailable(UnavailableReason::Transport(_))
        ));
    }

    #[tokio::test]
    async fn test_lookup_refused_connection_is_transport() {
        let client = SolanaRpcClient::new(closed_base_url().await);
        let lookup = client.mint_metadata(&CandidateAddress::new(USDC)).await;
        assert!(matches!(
            lookup,
            MintLookup::Unavailable(UnavailableReason::Transport(_))
        ));
    }

    #[tokio::test]
    async fn test_lookup_error_object_is_rpc() {
        let lookup = lookup_against(
            200,
            r#"{"jsonrpc":"2.0","id":1,"error":{"code":-32602,"message":"Invalid param: WrongSize"}}"#,
        )
        .await;
        match lookup {
            MintLookup::Unavailable(UnavailableReason::Rpc(message)) => {
                assert!(message.contains("Invalid param"));
            }
            other => panic!("expected an RPC error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_lookup_null_value_is_not_a_mint() {
        let lookup = lookup_against(
            200,
            r#"{"jsonrpc":"2.0","id":1,"result":{"context":{"slot":1},"value":null}}"#,
        )
        .await;
        assert_eq!(lookup, MintLookup::Unavailable(UnavailableReason::NotAMint));
    }

    #[tokio::test]
    async fn test_lookup_token_account_is_not_a_mint() {
        let lookup = lookup_against(
            200,
            r#"{"jsonrpc":"2.0","id":1,"result":{"context":{"slot":1},"value":{"data":{"parsed":{"type":"account","info":{"mint":"EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v","tokenAmount":{"amount":"1","decimals":6}}},"program":"spl-token","space":165},"owner":"TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA"}}}"#,
        )
        .await;
        assert_eq!(lookup, MintLookup::Unavailable(UnavailableReason::NotAMint));
    }

    #[tokio::test]
    async fn test_lookup_non_json_is_malformed() {
        let lookup = lookup_against(200, "not json").await;
        assert!(matches!(
            lookup,
            MintLookup::Unavailable(UnavailableReason::Malformed(_))
        ));
    }
}
