//! Create-agent form overlay.
//!
//! Three text fields (name, description, system prompt) with Tab cycling.
//! Submission failures come back through the reducer and land in `error`,
//! keeping the form open with its contents intact.

use arkchat_core::api::CreateAgentRequest;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use super::{OverlayUpdate, centered_rect};
use crate::effects::UiEffect;
use crate::events::CreateOrigin;

/// Which form field has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Description,
    SystemPrompt,
}

impl FormField {
    fn next(self) -> Self {
        match self {
            FormField::Name => FormField::Description,
            FormField::Description => FormField::SystemPrompt,
            FormField::SystemPrompt => FormField::Name,
        }
    }

    fn prev(self) -> Self {
        match self {
            FormField::Name => FormField::SystemPrompt,
            FormField::Description => FormField::Name,
            FormField::SystemPrompt => FormField::Description,
        }
    }
}

/// State for the create-agent form overlay.
#[derive(Debug)]
pub struct AgentFormState {
    pub name: String,
    pub description: String,
    pub system_prompt: String,
    pub focus: FormField,
    /// Inline error (validation or a failed create request).
    pub error: Option<String>,
    /// True while the create request is in flight.
    pub submitting: bool,
}

impl AgentFormState {
    pub fn open() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            system_prompt: String::new(),
            focus: FormField::Name,
            error: None,
            submitting: false,
        }
    }

    /// Called by the reducer when the create request failed.
    pub fn submit_failed(&mut self, error: String) {
        self.submitting = false;
        self.error = Some(error);
    }

    fn focused_field_mut(&mut self) -> &mut String {
        match self.focus {
            FormField::Name => &mut self.name,
            FormField::Description => &mut self.description,
            FormField::SystemPrompt => &mut self.system_prompt,
        }
    }

    fn build_request(&self) -> CreateAgentRequest {
        let prompt = self.system_prompt.trim();
        CreateAgentRequest {
            name: self.name.trim().to_string(),
            description: self.description.trim().to_string(),
            system_prompt: (!prompt.is_empty()).then(|| prompt.to_string()),
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> OverlayUpdate {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        if self.submitting {
            // Only Esc is honored while the request is in flight.
            return match key.code {
                KeyCode::Esc => OverlayUpdate::close(),
                _ => OverlayUpdate::stay(),
            };
        }

        // Clear a stale error on any edit
        if !matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
            self.error = None;
        }

        match key.code {
            KeyCode::Esc => OverlayUpdate::close(),
            KeyCode::Tab | KeyCode::Down => {
                self.focus = self.focus.next();
                OverlayUpdate::stay()
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.focus = self.focus.prev();
                OverlayUpdate::stay()
            }
            KeyCode::Enter => {
                if self.name.trim().is_empty() {
                    self.error = Some("Name is required".to_string());
                    return OverlayUpdate::stay();
                }
                self.submitting = true;
                OverlayUpdate::stay().with_effects(vec![UiEffect::CreateAgent {
                    origin: CreateOrigin::Form,
                    request: self.build_request(),
                }])
            }
            KeyCode::Backspace => {
                self.focused_field_mut().pop();
                OverlayUpdate::stay()
            }
            KeyCode::Char(c) if !ctrl => {
                self.focused_field_mut().push(c);
                OverlayUpdate::stay()
            }
            _ => OverlayUpdate::stay(),
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let overlay = centered_rect(area, 56, 12);
        frame.render_widget(Clear, overlay);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(" New Agent ");
        let body = block.inner(overlay);
        frame.render_widget(block, overlay);

        let field = |label: &str, value: &str, focused: bool| -> Line<'static> {
            let marker = if focused { "> " } else { "  " };
            let value_style = if focused {
                Style::default().fg(Color::Cyan)
            } else {
                Style::default()
            };
            Line::from(vec![
                Span::styled(marker.to_string(), Style::default().fg(Color::Cyan)),
                Span::styled(format!("{label:<14}"), Style::default().fg(Color::DarkGray)),
                Span::styled(value.to_string(), value_style),
            ])
        };

        let mut lines = vec![
            field("Name", &self.name, self.focus == FormField::Name),
            Line::default(),
            field(
                "Description",
                &self.description,
                self.focus == FormField::Description,
            ),
            Line::default(),
            field(
                "System prompt",
                &self.system_prompt,
                self.focus == FormField::SystemPrompt,
            ),
            Line::default(),
        ];

        if self.submitting {
            lines.push(Line::from(Span::styled(
                "Creating...",
                Style::default().fg(Color::Yellow),
            )));
        } else if let Some(error) = &self.error {
            lines.push(Line::from(Span::styled(
                error.clone(),
                Style::default().fg(Color::Red),
            )));
        } else {
            lines.push(Line::from(vec![
                Span::styled("Tab", Style::default().fg(Color::DarkGray)),
                Span::raw(" next field  "),
                Span::styled("Enter", Style::default().fg(Color::DarkGray)),
                Span::raw(" create  "),
                Span::styled("Esc", Style::default().fg(Color::DarkGray)),
                Span::raw(" cancel"),
            ]));
        }

        frame.render_widget(Paragraph::new(lines), body);
    }
}
