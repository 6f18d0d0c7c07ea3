//! Application state composition.
//!
//! This module defines the top-level state hierarchy for the TUI:
//! - `AppState` - combined state (`TuiState` + overlay)
//! - `TuiState` - non-overlay UI state (agents, transcript, input, view)
//! - `ChatActivity` - chat request state (idle or waiting on a reply)
//!
//! ## State Hierarchy
//!
//! ```text
//! AppState
//! ├── tui: TuiState
//! │   ├── view: View              (chat, templates, analytics)
//! │   ├── agents: AgentListState  (roster, selection)
//! │   ├── transcript: TranscriptState (turns, scroll)
//! │   ├── input: InputState       (message composer)
//! │   ├── templates: TemplateState (catalog selection, notices)
//! │   └── activity: ChatActivity  (pending chat request)
//! └── overlay: Option<Overlay>    (modal overlays)
//! ```
//!
//! ## Split State Architecture
//!
//! State is split between `TuiState` (non-overlay) and `Option<Overlay>`:
//! overlay handlers take `&mut self` and `&mut TuiState` simultaneously
//! without borrow conflicts, and the reducer routes keys to whichever is
//! active.

use crate::features::agents::AgentListState;
use crate::features::input::InputState;
use crate::features::templates::TemplateState;
use crate::features::transcript::TranscriptState;
use crate::overlays::Overlay;

// ============================================================================
// AppState (Combined State)
// ============================================================================

/// Combined application state for the TUI.
pub struct AppState {
    pub tui: TuiState,
    pub overlay: Option<Overlay>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            tui: TuiState::new(),
            overlay: None,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// View
// ============================================================================

/// Which main view occupies the content area.
///
/// Exactly one view is active at a time; overlays stack on top of whichever
/// view is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Chat,
    Templates,
    Analytics,
}

// ============================================================================
// ChatActivity
// ============================================================================

/// Chat request state.
///
/// At most one chat request is in flight. The agent id records which agent
/// the request was sent to, so replies that arrive after the user switched
/// agents can be discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatActivity {
    /// No chat request running, ready for input.
    Idle,
    /// Waiting for the agent's reply.
    Waiting { agent_id: i64 },
}

impl ChatActivity {
    /// Returns true if a chat request is in flight.
    pub fn is_waiting(&self) -> bool {
        !matches!(self, ChatActivity::Idle)
    }
}

// ============================================================================
// TuiState
// ============================================================================

/// TUI application state (non-overlay).
pub struct TuiState {
    /// Flag indicating the app should quit.
    pub should_quit: bool,
    /// Active main view.
    pub view: View,
    /// Agent roster and selection.
    pub agents: AgentListState,
    /// Transcript display state for the selected agent.
    pub transcript: TranscriptState,
    /// Message composer state.
    pub input: InputState,
    /// Template browser state.
    pub templates: TemplateState,
    /// Pending chat request, if any.
    pub activity: ChatActivity,
    /// True while the selected agent's transcript is being fetched.
    pub loading_conversation: bool,
    /// Spinner animation frame counter.
    pub spinner_frame: usize,
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            should_quit: false,
            view: View::Chat,
            agents: AgentListState::new(),
            transcript: TranscriptState::new(),
            input: InputState::new(),
            templates: TemplateState::new(),
            activity: ChatActivity::Idle,
            loading_conversation: false,
            spinner_frame: 0,
        }
    }

    /// True when the UI is waiting on any remote operation.
    ///
    /// Used by the runtime to pick the fast poll interval while spinners
    /// are animating.
    pub fn is_busy(&self) -> bool {
        self.activity.is_waiting()
            || self.loading_conversation
            || self.agents.loading
            || self.templates.creating
    }
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}
