//! Overlay modules for the TUI.
//!
//! Overlays are modal UI components that temporarily take over keyboard
//! input. Each overlay is self-contained: it owns its state, key handler,
//! and render function.
//!
//! - `agent_form.rs`: create-agent form (Ctrl+N)
//! - `confirm_clear.rs`: clear-conversation confirmation (Ctrl+L)

pub mod agent_form;
pub mod confirm_clear;

pub use agent_form::AgentFormState;
pub use confirm_clear::ConfirmClearState;
use crossterm::event::KeyEvent;
use ratatui::Frame;
use ratatui::layout::Rect;

use crate::effects::UiEffect;
use crate::state::TuiState;

// ============================================================================
// OverlayTransition / OverlayUpdate
// ============================================================================

/// Transition returned by overlay key handlers.
#[derive(Debug)]
pub enum OverlayTransition {
    Stay,
    Close,
}

/// Update returned by overlay key handlers.
#[derive(Debug)]
pub struct OverlayUpdate {
    pub transition: OverlayTransition,
    pub effects: Vec<UiEffect>,
}

impl OverlayUpdate {
    pub fn stay() -> Self {
        Self {
            transition: OverlayTransition::Stay,
            effects: Vec::new(),
        }
    }

    pub fn close() -> Self {
        Self {
            transition: OverlayTransition::Close,
            effects: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_effects(mut self, effects: Vec<UiEffect>) -> Self {
        self.effects = effects;
        self
    }
}

// ============================================================================
// Overlay
// ============================================================================

#[derive(Debug)]
pub enum Overlay {
    AgentForm(AgentFormState),
    ConfirmClear(ConfirmClearState),
}

impl Overlay {
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        match self {
            Overlay::AgentForm(form) => form.render(frame, area),
            Overlay::ConfirmClear(confirm) => confirm.render(frame, area),
        }
    }

    /// Handles a key while this overlay is active.
    ///
    /// Overlays get `&mut TuiState` alongside `&mut self` thanks to the
    /// split state architecture, so confirmations can mutate TUI state
    /// directly.
    pub fn handle_key(&mut self, tui: &mut TuiState, key: KeyEvent) -> OverlayUpdate {
        match self {
            Overlay::AgentForm(form) => form.handle_key(key),
            Overlay::ConfirmClear(confirm) => confirm.handle_key(tui, key),
        }
    }
}

// ============================================================================
// Shared render helpers
// ============================================================================

/// Computes a centered rect of the given size, clamped to the frame area.
pub(crate) fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}
