use anyhow::Result;
use clap::Parser;
use demolens_common::log;

mod args;
mod commands;
mod config;

use args::{Args, Commands};
use config::ConfigManager;

fn main() -> Result<()> {
    let args = Args::parse();
    let mut config_manager = ConfigManager::new(args.config_path.clone());
    let config = config_manager.load_config()?.unwrap_or_default();

    if !args.quiet {
        log::init(args.log_level.as_deref().or(config.log_level.as_deref()));
    }

    match &args.command {
        Commands::Analyze(analyze) => commands::analyze::run(analyze, &config)?,
        Commands::Types(types) => commands::types::run(types)?,
        Commands::Config(command) => commands::config::run(command, &config_manager, &config)?,
    }
    Ok(())
}
