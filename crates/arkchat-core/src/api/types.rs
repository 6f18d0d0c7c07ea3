//! Wire types for the ArkAgents HTTP API.
//!
//! All types are plain serde structs matching the server's JSON shapes.
//! The client treats every field as read-only: agents are created and owned
//! by the server, and the local copies are never mutated.

use serde::{Deserialize, Serialize};

/// Synthetic assistant reply appended when a chat request fails.
///
/// Every sent message must eventually produce a transcript entry, so failed
/// turns get this fixed text instead of being silently dropped.
pub const CHAT_ERROR_MESSAGE: &str = "Error: Could not get response from agent";

/// A configured conversational persona, managed by the remote service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Agent {
    /// Server-assigned identifier. Opaque to the client.
    pub id: i64,
    pub name: String,
    pub description: String,
    /// The server fills in a default prompt when none was supplied at
    /// creation, so this is present on reads but optional on create.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system_prompt: Option<String>,
}

/// Who authored a transcript entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// One entry in an agent's transcript, insertion-order significant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: Role,
    pub message: String,
}

impl ChatTurn {
    pub fn user(message: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            message: message.into(),
        }
    }

    pub fn assistant(message: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            message: message.into(),
        }
    }

    /// The fixed error turn appended when a chat request fails.
    pub fn error() -> Self {
        Self::assistant(CHAT_ERROR_MESSAGE)
    }
}

/// Body for POST `/api/agents/create`.
///
/// The client does not validate the name; a non-empty name is enforced
/// server-side.
#[derive(Debug, Clone, Serialize)]
pub struct CreateAgentRequest {
    pub name: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_prompt: Option<String>,
}

/// A predefined name/description/prompt tuple used to fast-create an agent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentTemplate {
    pub name: &'static str,
    pub description: &'static str,
    pub system_prompt: &'static str,
}

impl AgentTemplate {
    /// Builds the creation request for this template.
    pub fn to_request(&self) -> CreateAgentRequest {
        CreateAgentRequest {
            name: self.name.to_string(),
            description: self.description.to_string(),
            system_prompt: Some(self.system_prompt.to_string()),
        }
    }
}

// ============================================================================
// Response envelopes
// ============================================================================

#[derive(Debug, Deserialize)]
pub(crate) struct AgentListResponse {
    pub agents: Vec<Agent>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ConversationResponse {
    pub conversation: Vec<ChatTurn>,
}

#[derive(Debug, Serialize)]
pub(crate) struct ChatRequest<'a> {
    pub message: &'a str,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChatResponse {
    pub message: String,
}
