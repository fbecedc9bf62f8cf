//! DexScreener REST API response types.

use std::str::FromStr;

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::debug;

use crate::domain::PairSnapshot;

/// Response from `GET /latest/dex/tokens/{address}`.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenPairsResponse {
    /// Pairs for the token, `null` when the token is unknown.
    #[serde(default)]
    pub pairs: Option<Vec<DexPair>>,
}

/// One trading pair record.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DexPair {
    #[serde(default)]
    pub chain_id: Option<String>,
    #[serde(default)]
    pub pair_address: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub base_token: Option<DexToken>,
    /// USD price as a decimal string.
    #[serde(default)]
    pub price_usd: Option<String>,
    /// Native-unit price as a decimal string.
    #[serde(default)]
    pub price_native: Option<String>,
    #[serde(default)]
    pub liquidity: Option<DexLiquidity>,
    #[serde(default)]
    pub volume: Option<DexVolume>,
    #[serde(default)]
    pub info: Option<DexPairInfo>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DexToken {
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub symbol: Option<String>,
    #[serde(default, rename = "logoURI")]
    pub logo_uri: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DexLiquidity {
    #[serde(default)]
    pub usd: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DexVolume {
    #[serde(default)]
    pub h24: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DexPairInfo {
    #[serde(default)]
    pub image_url: Option<String>,
}

impl TokenPairsResponse {
    /// First pair in upstream order, if any.
    #[must_use]
    pub fn into_first_pair(self) -> Option<DexPair> {
        self.pairs.and_then(|pairs| pairs.into_iter().next())
    }
}

impl From<DexPair> for PairSnapshot {
    fn from(p: DexPair) -> Self {
        let base = p.base_token.unwrap_or_default();
        let logo = base
            .logo_uri
            .filter(|s| !s.is_empty())
            .or_else(|| p.info.and_then(|i| i.image_url).filter(|s| !s.is_empty()));

        Self {
            symbol: base.symbol.filter(|s| !s.is_empty()),
            name: base.name.filter(|s| !s.is_empty()),
            price_usd: p.price_usd.as_deref().and_then(parse_decimal),
            price_native: p.price_native.as_deref().and_then(parse_decimal),
            liquidity_usd: p.liquidity.and_then(|l| l.usd).and_then(Decimal::from_f64),
            volume_24h_usd: p.volume.and_then(|v| v.h24).and_then(Decimal::from_f64),
            chart_url: p.url.as_deref().and_then(parse_url),
            logo_url: logo.as_deref().and_then(parse_url),
        }
    }
}

fn parse_decimal(raw: &str) -> Option<Decimal> {
    Decimal::from_str(raw)
        .or_else(|_| Decimal::from_scientific(raw))
        .map_err(|e| debug!(value = raw, error = %e, "Ignoring unparsable decimal"))
        .ok()
}

fn parse_url(raw: &str) -> Option<url::Url> {
    url::Url::parse(raw)
        .map_err(|e| debug!(value = raw, error = %e, "Ignoring unparsable URL"))
        .ok()
}
