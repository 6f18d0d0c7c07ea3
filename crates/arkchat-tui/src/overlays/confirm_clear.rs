//! Clear-conversation confirmation overlay.
//!
//! Clearing only empties the local display; the server-side history is kept
//! and comes back on the next conversation load.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use super::{OverlayUpdate, centered_rect};
use crate::state::TuiState;

/// State for the clear-conversation confirmation.
#[derive(Debug)]
pub struct ConfirmClearState {
    /// Name of the agent whose transcript would be cleared.
    pub agent_name: String,
}

impl ConfirmClearState {
    pub fn open(agent_name: String) -> Self {
        Self { agent_name }
    }

    pub fn handle_key(&mut self, tui: &mut TuiState, key: KeyEvent) -> OverlayUpdate {
        match key.code {
            KeyCode::Enter | KeyCode::Char('y') | KeyCode::Char('Y') => {
                tui.transcript.clear();
                OverlayUpdate::close()
            }
            KeyCode::Esc | KeyCode::Char('n') | KeyCode::Char('N') => OverlayUpdate::close(),
            _ => OverlayUpdate::stay(),
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let overlay = centered_rect(area, 48, 6);
        frame.render_widget(Clear, overlay);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow))
            .title(" Clear Conversation ");
        let body = block.inner(overlay);
        frame.render_widget(block, overlay);

        let lines = vec![
            Line::from(Span::raw(format!(
                "Clear the displayed conversation with {}?",
                self.agent_name
            ))),
            Line::default(),
            Line::from(vec![
                Span::styled("Enter", Style::default().fg(Color::DarkGray)),
                Span::raw(" clear  "),
                Span::styled("Esc", Style::default().fg(Color::DarkGray)),
                Span::raw(" cancel"),
            ]),
        ];
        frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), body);
    }
}

#[cfg(test)]
mod tests {
    use arkchat_core::api::ChatTurn;
    use crossterm::event::KeyModifiers;

    use super::*;
    use crate::overlays::OverlayTransition;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_confirm_clears_transcript() {
        let mut tui = TuiState::new();
        tui.transcript.set_turns(vec![ChatTurn::user("hello")]);

        let mut confirm = ConfirmClearState::open("Helper".to_string());
        let update = confirm.handle_key(&mut tui, key(KeyCode::Enter));
        assert!(matches!(update.transition, OverlayTransition::Close));
        assert!(tui.transcript.is_empty());
    }

    #[test]
    fn test_cancel_keeps_transcript() {
        let mut tui = TuiState::new();
        tui.transcript.set_turns(vec![ChatTurn::user("hello")]);

        let mut confirm = ConfirmClearState::open("Helper".to_string());
        let update = confirm.handle_key(&mut tui, key(KeyCode::Esc));
        assert!(matches!(update.transition, OverlayTransition::Close));
        assert_eq!(tui.transcript.turns().len(), 1);
    }

    #[test]
    fn test_other_keys_stay_open() {
        let mut tui = TuiState::new();
        let mut confirm = ConfirmClearState::open("Helper".to_string());
        let update = confirm.handle_key(&mut tui, key(KeyCode::Char('x')));
        assert!(matches!(update.transition, OverlayTransition::Stay));
    }
}
