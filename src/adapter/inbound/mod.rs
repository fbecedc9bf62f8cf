//! Inbound adapters: the Telegram dispatcher and the command line.

pub mod cli;
pub mod telegram;
