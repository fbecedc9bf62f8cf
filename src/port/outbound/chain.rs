//! Chain metadata port for mint lookups.

use async_trait::async_trait;

use crate::domain::{CandidateAddress, MintLookup};

/// Best-effort source of on-chain mint metadata.
#[async_trait]
pub trait MintMetadataSource: Send + Sync {
    /// Resolve decimals and supply for the mint at `address`.
    ///
    /// Expected failures (bad key encoding, non-mint account, RPC errors) are
    /// reported as [`MintLookup::Unavailable`] rather than raised.
    async fn mint_metadata(&self, address: &CandidateAddress) -> MintLookup;
}
