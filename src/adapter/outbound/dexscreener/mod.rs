//! DexScreener market data adapter.

pub mod client;
pub mod dto;
pub mod settings;

pub use client::DexScreenerClient;
pub use settings::DexScreenerConfig;
