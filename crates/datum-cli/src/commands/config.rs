use anyhow::{Result, bail};
use datum_config::Config;
use std::path::{Path, PathBuf};

use crate::cli::ConfigCommands;

pub fn handle(cmd: ConfigCommands, path: Option<&Path>) -> Result<()> {
    let path = path.map(PathBuf::from).unwrap_or_else(Config::config_path);

    match cmd {
        ConfigCommands::Path => {
            println!("{}", path.display());
            Ok(())
        }
        ConfigCommands::Init { force } => init(&path, force),
        ConfigCommands::Show => show(&path),
    }
}

fn init(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        bail!("{} already exists (use --force to overwrite)", path.display());
    }

    Config::write_default(path)?;
    println!("✓ Created {}", path.display());
    Ok(())
}

fn show(path: &Path) -> Result<()> {
    let config = if path.exists() {
        Config::load_from(path)?
    } else {
        Config::default()
    };

    print!("{}", toml::to_string_pretty(&config)?);
    Ok(())
}
