use clap::Parser;

use mintscope::adapter::inbound::cli::command::{CheckCommand, Cli, Commands};
use mintscope::adapter::inbound::cli::output::{self, OutputConfig};
use mintscope::adapter::inbound::cli::{check, lookup, run};

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    output::configure(OutputConfig::new(cli.json, cli.quiet), cli.color);

    let result = match cli.command_or_default() {
        Commands::Run(args) => run::execute(args.config.as_deref()).await,
        Commands::Lookup(args) => lookup::execute(&args).await,
        Commands::Check(CheckCommand::Config(args)) => {
            check::execute_config(args.config.as_deref())
        }
    };

    if let Err(e) = result {
        output::error(&e.to_string());
        std::process::exit(1);
    }
}
