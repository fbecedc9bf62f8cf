//! On-chain mint metadata.

use std::fmt;

use rust_decimal::Decimal;

/// Decimal precision and human-scaled supply of a token mint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MintMetadata {
    /// Decimal precision, when the chain reported one.
    pub decimals: Option<u8>,
    /// Total supply divided by `10^decimals`, when representable.
    pub supply: Option<Decimal>,
}

impl MintMetadata {
    /// Build metadata from a raw on-chain supply.
    ///
    /// Without decimals the raw supply is in base units and cannot be scaled,
    /// so `supply` is left empty. Scaling that cannot be represented exactly
    /// leaves `supply` empty too.
    #[must_use]
    pub fn from_raw(decimals: Option<u8>, raw_supply: u64) -> Self {
        let supply = decimals.and_then(|d| {
            Decimal::try_from_i128_with_scale(i128::from(raw_supply), u32::from(d))
                .ok()
                .map(|s| s.normalize())
        });
        Self { decimals, supply }
    }
}

/// Why mint metadata could not be resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnavailableReason {
    /// The address is not a valid public key encoding.
    InvalidAddress,
    /// The account does not exist or is not a token mint.
    NotAMint,
    /// The RPC node could not be reached or returned an HTTP error.
    Transport(String),
    /// The RPC node answered with a JSON-RPC error.
    Rpc(String),
    /// The response did not have the expected shape.
    Malformed(String),
}

impl fmt::Display for UnavailableReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidAddress => write!(f, "address is not a valid public key"),
            Self::NotAMint => write!(f, "account is not a token mint"),
            Self::Transport(e) => write!(f, "RPC transport failed: {e}"),
            Self::Rpc(e) => write!(f, "RPC returned an error: {e}"),
            Self::Malformed(e) => write!(f, "malformed RPC response: {e}"),
        }
    }
}

/// Outcome of a best-effort mint metadata lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MintLookup {
    Found(MintMetadata),
    Unavailable(UnavailableReason),
}

impl MintLookup {
    /// Metadata if the lookup succeeded.
    #[must_use]
    pub fn metadata(&self) -> Option<&MintMetadata> {
        match self {
            Self::Found(metadata) => Some(metadata),
            Self::Unavailable(_) => None,
        }
    }
}
