//! Command-line interface definitions.
//!
//! Defines the CLI structure for the mintscope binary using `clap`. Running
//! without a subcommand starts the bot.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Telegram bot that enriches Solana token addresses with market and supply data
#[derive(Parser, Debug)]
#[command(name = "mintscope")]
#[command(version)]
pub struct Cli {
    /// Color output mode [auto, always, never]
    #[arg(
        long,
        global = true,
        default_value = "auto",
        hide_possible_values = true
    )]
    pub color: ColorChoice,

    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// The requested command, defaulting to `run` with default arguments.
    #[must_use]
    pub fn command_or_default(self) -> Commands {
        self.command
            .unwrap_or(Commands::Run(ConfigPathArg { config: None }))
    }
}

/// Color output mode for terminal rendering.
#[derive(Clone, Copy, Debug, Default, clap::ValueEnum)]
pub enum ColorChoice {
    /// Detect automatically
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Top-level subcommands for the mintscope CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the Telegram bot (default)
    Run(ConfigPathArg),

    /// Look up one token address and print the reply the bot would send
    Lookup(LookupArgs),

    /// Run diagnostic checks
    #[command(subcommand)]
    Check(CheckCommand),
}

/// Subcommands for `mintscope check`.
#[derive(Subcommand, Debug)]
pub enum CheckCommand {
    /// Validate the configuration file and environment.
    Config(ConfigPathArg),
}

/// Shared argument struct for commands that require only a configuration path.
///
/// When omitted, `config.toml` in the working directory is used if present.
#[derive(Parser, Debug)]
pub struct ConfigPathArg {
    /// Path to the configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

/// Arguments for the `lookup` subcommand.
#[derive(Parser, Debug)]
pub struct LookupArgs {
    /// Token mint address to look up.
    pub address: String,

    /// Path to the configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}
