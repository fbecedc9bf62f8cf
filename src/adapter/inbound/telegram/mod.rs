//! Telegram inbound adapter: long-polling dispatcher.

pub mod dispatch;

pub use dispatch::{run_dispatcher, BotHandlers};
