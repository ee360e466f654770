//! Config command handlers.

use anyhow::{Context, Result};

use arena_core::config::{Config, paths};

pub fn path() -> Result<()> {
    println!("{}", paths::config_path().display());
    Ok(())
}

pub fn init() -> Result<()> {
    let path = paths::config_path();
    Config::init(&path).context("initialize config")?;
    println!("Created {}", path.display());
    Ok(())
}
