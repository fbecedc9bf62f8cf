//! DexScreener REST API client.
//!
//! Resolves a token address to its trading pairs with
//! `GET {base_url}/latest/dex/tokens/{address}` and keeps the first pair in
//! upstream order.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client as HttpClient;
use tracing::{debug, warn};
use url::Url;

use super::dto::TokenPairsResponse;
use super::settings::DexScreenerConfig;
use crate::domain::{CandidateAddress, PairLookup, PairSnapshot};
use crate::error::{Error, Result};
use crate::port::MarketDataSource;

/// HTTP client for the DexScreener token endpoint.
pub struct DexScreenerClient {
    http: HttpClient,
    base_url: String,
}

impl DexScreenerClient {
    /// Create a client for the given base URL with default HTTP settings.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: HttpClient::new(),
            base_url: base_url.into(),
        }
    }

    #[must_use]
    pub fn from_config(config: &DexScreenerConfig) -> Self {
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
            base_url: config.base_url.clone(),
        }
    }

    /// The address is pushed as a single percent-encoded path segment.
    fn tokens_url(&self, address: &CandidateAddress) -> Result<Url> {
        let mut url = Url::parse(&self.base_url)?;
        url.path_segments_mut()
            .map_err(|()| Error::Upstream(format!("base URL cannot take a path: {}", self.base_url)))?
            .pop_if_empty()
            .extend(["latest", "dex", "tokens"])
            .push(address.as_str());
        Ok(url)
    }

    /// Fetch the raw pairs response for a token address.
    pub async fn get_token_pairs(&self, address: &CandidateAddress) -> Result<TokenPairsResponse> {
        let url = self.tokens_url(address)?;
        debug!(url = %url, "Fetching token pairs");

        let response = self.http.get(url).send().await?.error_for_status()?;
        let parsed = response.json::<TokenPairsResponse>().await?;

        debug!(
            count = parsed.pairs.as_ref().map_or(0, Vec::len),
            "Fetched token pairs"
        );
        Ok(parsed)
    }
}

#[async_trait]
impl MarketDataSource for DexScreenerClient {
    async fn lookup_pair(&self, address: &CandidateAddress) -> Result<PairLookup> {
        let response = self.get_token_pairs(address).await?;
        Ok(match response.into_first_pair() {
            Some(pair) => PairLookup::found(PairSnapshot::from(pair)),
            None => PairLookup::NotFound,
        })
    }

    fn source_name(&self) -> &'static str {
        "DexScreener"
    }
}
