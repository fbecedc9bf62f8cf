//! Outbound adapters for market data, chain metadata and messaging.

pub mod dexscreener;
pub mod solana;
pub mod telegram;

#[cfg(test)]
pub(crate) mod test_server;
