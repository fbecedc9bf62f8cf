//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! Ports define the extension points in the hexagonal architecture.
//! Handlers receive implementations as `Arc<dyn ...>` so both upstream
//! services and the chat platform can be replaced by test doubles.
//!
//! # Architecture
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │      Application        │
//!                    │                         │
//!     ┌──────────────┤  Domain + Port          ├──────────────┐
//!     │              │                         │              │
//!     │              └─────────────────────────┘              │
//!     │                         │                             │
//!     ▼                         ▼                             ▼
//! ┌────────────┐         ┌─────────────┐              ┌───────────┐
//! │DexScreener │         │   Solana    │              │ Telegram  │
//! │  Adapter   │         │ RPC Adapter │              │  Adapter  │
//! └────────────┘         └─────────────┘              └───────────┘
//! ```
//!
//! # Available Ports
//!
//! - [`outbound::market::MarketDataSource`] - Trading pair lookup
//! - [`outbound::chain::MintMetadataSource`] - Mint decimals and supply
//! - [`outbound::messenger::Messenger`] - Sending replies and acknowledging callbacks

pub mod outbound;

pub use outbound::chain::MintMetadataSource;
pub use outbound::market::MarketDataSource;
pub use outbound::messenger::Messenger;
