//! Process wiring: configuration and client construction.

pub mod bootstrap;
pub mod config;
