//! HTTP client for the ArkAgents service.
//!
//! Thin typed wrapper over the four endpoints the client consumes:
//!
//! | Operation        | Method & path                       |
//! |------------------|-------------------------------------|
//! | List agents      | GET  `/api/agents/list`             |
//! | Create agent     | POST `/api/agents/create`           |
//! | Get conversation | GET  `/api/agents/{id}/conversation`|
//! | Send message     | POST `/api/agents/{id}/chat`        |
//!
//! Transport failures, non-2xx statuses, and malformed bodies all collapse
//! into a single `anyhow` error path; callers decide how (or whether) to
//! surface it. Every request runs under the client-wide timeout from config,
//! so no call can hang indefinitely.

mod types;

use std::time::Duration;

use anyhow::{Context, Result, bail};
pub use types::{AgentTemplate, CHAT_ERROR_MESSAGE, CreateAgentRequest};
pub use types::{Agent, ChatTurn, Role};
use url::Url;

use crate::config::Config;

/// Typed client for the ArkAgents HTTP API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
}

impl ApiClient {
    /// Creates a client from config (base URL and request timeout).
    pub fn new(config: &Config) -> Result<Self> {
        let base_url = Url::parse(&config.base_url)
            .with_context(|| format!("Invalid base URL: {}", config.base_url))?;
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self { http, base_url })
    }

    /// Fetches all agents, preserving server order.
    pub async fn list_agents(&self) -> Result<Vec<Agent>> {
        let url = self.endpoint("api/agents/list")?;
        let response = self
            .http
            .get(url)
            .send()
            .await
            .context("Agent list request failed")?;
        let body: types::AgentListResponse = decode(response).await?;
        Ok(body.agents)
    }

    /// Creates an agent and returns the server's copy (with the id and the
    /// generated system prompt filled in).
    pub async fn create_agent(&self, request: &CreateAgentRequest) -> Result<Agent> {
        let url = self.endpoint("api/agents/create")?;
        let response = self
            .http
            .post(url)
            .json(request)
            .send()
            .await
            .context("Agent creation request failed")?;
        decode(response).await
    }

    /// Fetches the stored transcript for an agent. An empty list is valid.
    pub async fn conversation(&self, agent_id: i64) -> Result<Vec<ChatTurn>> {
        let url = self.endpoint(&format!("api/agents/{agent_id}/conversation"))?;
        let response = self
            .http
            .get(url)
            .send()
            .await
            .context("Conversation request failed")?;
        let body: types::ConversationResponse = decode(response).await?;
        Ok(body.conversation)
    }

    /// Sends one user message and returns the assistant's reply text.
    pub async fn send_chat(&self, agent_id: i64, message: &str) -> Result<String> {
        let url = self.endpoint(&format!("api/agents/{agent_id}/chat"))?;
        let response = self
            .http
            .post(url)
            .json(&types::ChatRequest { message })
            .send()
            .await
            .context("Chat request failed")?;
        let body: types::ChatResponse = decode(response).await?;
        Ok(body.message)
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path)
            .with_context(|| format!("Invalid endpoint path: {path}"))
    }
}

/// Checks the status and decodes the JSON body.
///
/// Error bodies are included in the message for the log; the caller-facing
/// policy (silent degrade vs. transcript entry) lives in the UI layer.
async fn decode<T: serde::de::DeserializeOwned>(response: reqwest::Response) -> Result<T> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        bail!("Request failed with status {status}: {body}");
    }
    response
        .json::<T>()
        .await
        .context("Failed to decode response body")
}

/// Built-in template catalog for the template browser.
///
/// The template browser is a collaborator that hands back
/// name/description/prompt tuples; the catalog ships with the client.
pub fn template_catalog() -> &'static [AgentTemplate] {
    &[
        AgentTemplate {
            name: "Sales Assistant",
            description: "Helps with sales outreach and follow-ups",
            system_prompt: "You are a sales assistant. Draft outreach messages, \
                            qualify leads, and suggest follow-ups. Keep replies \
                            short and actionable.",
        },
        AgentTemplate {
            name: "Support Agent",
            description: "Answers product and troubleshooting questions",
            system_prompt: "You are a customer support agent. Diagnose issues \
                            step by step and always confirm the resolution \
                            before closing.",
        },
        AgentTemplate {
            name: "Research Assistant",
            description: "Summarizes sources and drafts literature notes",
            system_prompt: "You are a research assistant. Summarize accurately, \
                            cite which input each claim came from, and flag \
                            anything you are unsure about.",
        },
        AgentTemplate {
            name: "Writing Coach",
            description: "Edits prose for clarity and tone",
            system_prompt: "You are a writing coach. Suggest concrete edits and \
                            explain the reasoning behind each one.",
        },
    ]
}
