//! Full-screen TUI implementation for ArkChat.

pub mod effects;
pub mod events;
pub mod features;
pub mod overlays;
pub mod render;
pub mod runtime;
pub mod state;
pub mod terminal;
pub mod update;

use std::io::{IsTerminal, Write, stderr};

use anyhow::Result;
use arkchat_core::api::ApiClient;
use arkchat_core::config::Config;
pub use runtime::TuiRuntime;

/// Runs the interactive chat session.
pub async fn run_interactive(config: &Config) -> Result<()> {
    // Chat mode requires a terminal to render the TUI
    if !stderr().is_terminal() {
        anyhow::bail!(
            "Chat mode requires a terminal.\n\
             Use `arkchat agents list` for non-interactive use."
        );
    }

    let client = ApiClient::new(config)?;

    // Print pre-TUI info to stderr (will be replaced by alternate screen)
    let mut err = stderr();
    writeln!(err, "ArkChat")?;
    writeln!(err, "Service: {}", config.base_url)?;
    err.flush()?;

    let mut runtime = TuiRuntime::new(client)?;
    runtime.run()?;

    // Print goodbye after TUI exits (terminal restored)
    writeln!(stderr(), "Goodbye!")?;

    Ok(())
}
