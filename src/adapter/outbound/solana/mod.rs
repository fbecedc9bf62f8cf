//! Solana RPC chain metadata adapter.

pub mod client;
pub mod dto;
pub mod settings;

pub use client::SolanaRpcClient;
pub use settings::{Commitment, SolanaRpcConfig};
