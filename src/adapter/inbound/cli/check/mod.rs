//! Handlers for `mintscope check` subcommands.

pub mod config;

pub use config::execute_config;
