//! Outbound ports (driven side): interfaces implemented by outbound adapters.
//!
//! These contracts describe the two upstream data services and the chat
//! platform the bot replies through.

pub mod chain;
pub mod market;
pub mod messenger;
