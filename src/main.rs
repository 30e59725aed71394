mod app;
mod cli;
mod config;
mod consts;
mod core;
mod error;
mod files;
mod logging;
mod output;
mod utils;

use clap::Parser;

use app::{CommandContext, handle_command};
use cli::{Cli, parse_command};
use config::Config;

fn main() {
    let cli = Cli::parse();

    // JSON output must stay machine-readable, so no config chatter
    let config = match Config::load(cli.config.as_deref(), &cli.root, cli.json) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };
    let cli = cli.with_config(&config);
    logging::init(cli.debug);

    let command = parse_command(cli.command);
    let ctx = CommandContext::new(&cli, config);
    if let Err(e) = handle_command(command, &ctx) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
