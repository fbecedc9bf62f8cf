//! Market data port for trading pair lookups.

use async_trait::async_trait;

use crate::domain::{CandidateAddress, PairLookup};
use crate::error::Result;

/// Source of trading pair snapshots keyed by token address.
#[async_trait]
pub trait MarketDataSource: Send + Sync {
    /// Look up the first trading pair reported for `address`.
    ///
    /// An address with no pairs is [`PairLookup::NotFound`], not an error.
    /// Transport and decoding failures are returned as errors for the caller
    /// to handle.
    async fn lookup_pair(&self, address: &CandidateAddress) -> Result<PairLookup>;

    /// Get the source name for logging.
    fn source_name(&self) -> &'static str;
}
