//! Template browser view.
//!
//! Shows the built-in template catalog; Enter creates an agent from the
//! highlighted template. Success lands on the new agent's chat; failure
//! surfaces as a non-blocking notice at the bottom of the view.

use arkchat_core::api::template_catalog;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap};

/// Template browser state.
#[derive(Debug, Default)]
pub struct TemplateState {
    pub selected: usize,
    /// True while a create-from-template request is in flight.
    pub creating: bool,
    /// Error from the last creation attempt, shown inline.
    /// Success switches back to the chat view instead.
    pub error: Option<String>,
}

impl TemplateState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select_next(&mut self) {
        let len = template_catalog().len();
        if len > 0 {
            self.selected = (self.selected + 1) % len;
        }
    }

    pub fn select_prev(&mut self) {
        let len = template_catalog().len();
        if len > 0 {
            self.selected = (self.selected + len - 1) % len;
        }
    }
}

/// Renders the template browser view.
pub fn render_templates(state: &TemplateState, frame: &mut Frame, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),    // Template list
            Constraint::Length(4), // Selected template's prompt
            Constraint::Length(1), // Notice / hints
        ])
        .split(area);

    let items: Vec<ListItem> = template_catalog()
        .iter()
        .map(|template| {
            ListItem::new(vec![
                Line::from(Span::raw(template.name)),
                Line::from(Span::styled(
                    template.description,
                    Style::default().fg(Color::DarkGray),
                )),
            ])
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(" Templates "),
        )
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );

    let mut list_state = ListState::default();
    list_state.select(Some(state.selected));
    frame.render_stateful_widget(list, chunks[0], &mut list_state);

    if let Some(template) = template_catalog().get(state.selected) {
        let prompt = Paragraph::new(template.system_prompt)
            .wrap(Wrap { trim: true })
            .style(Style::default().fg(Color::DarkGray))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray))
                    .title(" System prompt "),
            );
        frame.render_widget(prompt, chunks[1]);
    }

    let status = if state.creating {
        Line::from(Span::styled(
            "Creating agent...",
            Style::default().fg(Color::Yellow),
        ))
    } else if let Some(error) = &state.error {
        Line::from(Span::styled(
            format!("Creation failed: {error}"),
            Style::default().fg(Color::Red),
        ))
    } else {
        Line::from(vec![
            Span::styled("Enter", Style::default().fg(Color::DarkGray)),
            Span::raw(" create agent  "),
            Span::styled("Esc", Style::default().fg(Color::DarkGray)),
            Span::raw(" back to chat"),
        ])
    };
    frame.render_widget(Paragraph::new(status), chunks[2]);
}
