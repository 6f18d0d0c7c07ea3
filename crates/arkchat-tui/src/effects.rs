//! UI effect types.
//!
//! Effects are commands returned by the reducer that the runtime executes.
//! They represent I/O and task spawning only (no direct UI mutations).
//!
//! This keeps the reducer pure: it only mutates state and returns effects,
//! never performs I/O or spawns tasks directly.

use arkchat_core::api::CreateAgentRequest;

use crate::events::CreateOrigin;

/// Effects returned by the reducer for the runtime to execute.
///
/// The reducer returns `Vec<UiEffect>` from each update call.
/// The runtime executes these effects after processing events.
#[derive(Debug)]
pub enum UiEffect {
    /// Quit the application.
    Quit,

    /// Fetch the agent roster.
    LoadAgents,

    /// Fetch the stored transcript for an agent.
    LoadConversation { agent_id: i64 },

    /// Create an agent on the service.
    CreateAgent {
        origin: CreateOrigin,
        request: CreateAgentRequest,
    },

    /// Send one user message to an agent.
    SendChat { agent_id: i64, message: String },
}
