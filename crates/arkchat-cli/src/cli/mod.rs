//! CLI entry and dispatch.

use anyhow::{Context, Result};
use arkchat_core::{config, logging};
use clap::Parser;

mod commands;

#[derive(Parser)]
#[command(name = "arkchat")]
#[command(version = "0.1")]
#[command(about = "Terminal client for the ArkAgents service")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Override the service base URL from config
    #[arg(long, value_name = "URL", global = true)]
    base_url: Option<String>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Start the interactive chat session (default)
    Chat,

    /// Manage agents
    Agents {
        #[command(subcommand)]
        command: AgentCommands,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(clap::Subcommand)]
enum AgentCommands {
    /// Lists agents on the service
    List {
        /// Print raw JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Creates an agent
    Create {
        /// Agent name
        #[arg(long)]
        name: String,
        /// Agent description
        #[arg(long, default_value = "")]
        description: String,
        /// System prompt (server generates one when omitted)
        #[arg(long, value_name = "PROMPT")]
        system_prompt: Option<String>,
    },
}

#[derive(clap::Subcommand)]
enum ConfigCommands {
    /// Show the path to the config file
    Path,
    /// Initialize a default config file (if not present)
    Init,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let _log_guard = logging::init().context("initialize logging")?;

    // one tokio runtime for everything
    let rt = tokio::runtime::Runtime::new().context("create tokio runtime")?;

    rt.block_on(async move { dispatch(cli).await })
}

async fn dispatch(cli: Cli) -> Result<()> {
    let mut config = config::Config::load().context("load config")?;
    if let Some(url) = cli.base_url {
        config.base_url = url;
    }

    // default to chat mode
    let Some(command) = cli.command else {
        return commands::chat::run(&config).await;
    };

    match command {
        Commands::Chat => commands::chat::run(&config).await,

        Commands::Agents { command } => match command {
            AgentCommands::List { json } => commands::agents::list(&config, json).await,
            AgentCommands::Create {
                name,
                description,
                system_prompt,
            } => commands::agents::create(&config, name, description, system_prompt).await,
        },

        Commands::Config { command } => match command {
            ConfigCommands::Path => commands::config::path(),
            ConfigCommands::Init => commands::config::init(),
        },
    }
}
