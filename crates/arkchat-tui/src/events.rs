//! UI event types.
//!
//! Events are the reducer's only input: terminal input, the frame tick, and
//! completions of async operations spawned by the runtime.
//!
//! Async results carry `Result<_, String>` rather than `anyhow::Error` so
//! events stay cheap to clone in tests; the runtime formats errors with the
//! full context chain before sending.

use arkchat_core::api::{Agent, ChatTurn};

/// Where an agent-creation request originated.
///
/// Determines where a creation failure is surfaced: inline in the form
/// overlay, or as a notice in the template browser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreateOrigin {
    Form,
    Template,
}

/// Events processed by the reducer.
#[derive(Debug)]
pub enum UiEvent {
    /// Periodic tick for spinner animation and render pacing.
    Tick,
    /// Raw terminal input.
    Terminal(crossterm::event::Event),
    /// The agent roster finished loading.
    AgentsLoaded(Result<Vec<Agent>, String>),
    /// The transcript for `agent_id` finished loading.
    ///
    /// `agent_id` is the selection at dispatch time; the reducer discards
    /// the result if the selection has moved on since.
    ConversationLoaded {
        agent_id: i64,
        result: Result<Vec<ChatTurn>, String>,
    },
    /// An agent-creation request completed.
    AgentCreated {
        origin: CreateOrigin,
        result: Result<Agent, String>,
    },
    /// A chat request completed.
    ///
    /// `agent_id` is the agent the message was sent to; stale completions
    /// (selection changed while waiting) are discarded.
    ChatCompleted {
        agent_id: i64,
        result: Result<String, String>,
    },
}
