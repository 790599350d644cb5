use anyhow::{Result, bail};
use tracing::info;

use crate::args::ConfigCommand;
use crate::config::{Config, ConfigManager};

pub fn run(command: &ConfigCommand, manager: &ConfigManager, config: &Config) -> Result<()> {
    match command {
        ConfigCommand::Show => {
            match manager.get_config_path().filter(|path| path.exists()) {
                Some(path) => println!("# {}", path.display()),
                None => println!("# defaults (no config file found)"),
            }
            println!("{}", serde_json::to_string_pretty(config)?);
        }
        ConfigCommand::Init { force } => {
            if let Some(path) = manager.get_config_path() {
                if path.exists() && !force {
                    bail!(
                        "Config file already exists at {}, use --force to overwrite",
                        path.display()
                    );
                }
            }
            let path = manager.save_config(&Config::default())?;
            info!("📝 Wrote default config to {}", path.display());
        }
    }
    Ok(())
}
