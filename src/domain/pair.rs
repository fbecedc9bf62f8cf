//! Trading pair snapshots reported by the market data service.

use rust_decimal::Decimal;

/// Read-only market snapshot for the first pair returned upstream.
///
/// Every field comes from the market data service as-is. Missing values are
/// kept as `None` and rendered by the formatter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairSnapshot {
    /// Base token ticker.
    pub symbol: Option<String>,
    /// Base token display name.
    pub name: Option<String>,
    /// Price in USD.
    pub price_usd: Option<Decimal>,
    /// Price in the chain's native unit (SOL).
    pub price_native: Option<Decimal>,
    /// Pool liquidity in USD.
    pub liquidity_usd: Option<Decimal>,
    /// Trading volume over the last 24 hours in USD.
    pub volume_24h_usd: Option<Decimal>,
    /// Link to the pair's chart page.
    pub chart_url: Option<url::Url>,
    /// Token logo, from whichever upstream field provided one.
    pub logo_url: Option<url::Url>,
}

/// Outcome of a market data lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PairLookup {
    Found(Box<PairSnapshot>),
    /// The service knows no pairs for this address.
    NotFound,
}

impl PairLookup {
    #[must_use]
    pub fn found(snapshot: PairSnapshot) -> Self {
        Self::Found(Box::new(snapshot))
    }
}
