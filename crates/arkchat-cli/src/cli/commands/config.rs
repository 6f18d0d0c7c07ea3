//! Config command handlers.

use std::fs;

use anyhow::{Context, Result};
use arkchat_core::config::{Config, paths};

pub fn path() -> Result<()> {
    println!("{}", paths::config_path().display());
    Ok(())
}

pub fn init() -> Result<()> {
    let config_path = paths::config_path();
    if config_path.exists() {
        println!("Config already exists at {}", config_path.display());
        return Ok(());
    }

    if let Some(parent) = config_path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("create config directory {}", parent.display()))?;
    }
    let contents = toml::to_string_pretty(&Config::default()).context("serialize config")?;
    fs::write(&config_path, contents)
        .with_context(|| format!("write config to {}", config_path.display()))?;

    println!("Created config at {}", config_path.display());
    Ok(())
}
