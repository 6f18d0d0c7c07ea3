//! Interactive chat command handler.

use anyhow::{Context, Result};
use arkchat_core::config::Config;

pub async fn run(config: &Config) -> Result<()> {
    arkchat_tui::run_interactive(config)
        .await
        .context("chat session failed")
}
