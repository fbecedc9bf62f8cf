//! Mintscope - Telegram bot that enriches Solana token addresses.
//!
//! A user pastes a token mint address into a chat; the bot replies with one
//! formatted summary combining DEX market data (price, liquidity, volume) and
//! on-chain mint metadata (decimals, supply), plus buttons to copy the
//! address or open the chart.
//!
//! # Architecture
//!
//! The crate follows a hexagonal layout:
//!
//! - [`domain`] - Addresses, market snapshots, mint metadata, chat messages
//!   and the callback data schema. No I/O.
//! - [`port`] - Traits the application depends on: market data, mint
//!   metadata and messaging.
//! - [`application`] - The message flow, the callback flow and reply
//!   formatting.
//! - [`adapter`] - DexScreener, Solana JSON-RPC and Telegram implementations
//!   of the ports, the teloxide dispatcher and the CLI.
//! - [`infrastructure`] - Configuration loading and client wiring.
//! - [`error`] - Error types for the crate.
//!
//! # Example
//!
//! ```no_run
//! use mintscope::infrastructure::config::settings::Config;
//! use mintscope::infrastructure::bootstrap;
//!
//! let config = Config::load("config.toml").unwrap();
//! let bot = teloxide::Bot::new(config.require_bot_token().unwrap());
//! let handlers = bootstrap::build_bot_handlers(&config, bot);
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;
