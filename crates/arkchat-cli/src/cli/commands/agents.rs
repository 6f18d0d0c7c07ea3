//! Agent command handlers.

use anyhow::{Context, Result};
use arkchat_core::api::{ApiClient, CreateAgentRequest};
use arkchat_core::config::Config;

pub async fn list(config: &Config, json: bool) -> Result<()> {
    let client = ApiClient::new(config)?;
    let agents = client.list_agents().await.context("list agents")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&agents)?);
        return Ok(());
    }

    if agents.is_empty() {
        println!("No agents found.");
    } else {
        for agent in agents {
            println!("{}  {}  {}", agent.id, agent.name, agent.description);
        }
    }
    Ok(())
}

pub async fn create(
    config: &Config,
    name: String,
    description: String,
    system_prompt: Option<String>,
) -> Result<()> {
    let client = ApiClient::new(config)?;
    let request = CreateAgentRequest {
        name,
        description,
        system_prompt,
    };
    let agent = client
        .create_agent(&request)
        .await
        .context("create agent")?;

    println!("Created agent {} ({})", agent.name, agent.id);
    Ok(())
}
