//! Telegram outbound adapter.

pub mod messenger;

pub use messenger::TelegramMessenger;
