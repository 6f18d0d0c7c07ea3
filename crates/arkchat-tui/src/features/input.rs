//! Message composer state and rendering.
//!
//! Single-line input with a character-indexed cursor. Widths are computed
//! with `unicode-width` so the cursor lands correctly on wide characters.

use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::state::ChatActivity;

/// Message composer state.
#[derive(Debug, Default)]
pub struct InputState {
    text: String,
    /// Cursor position in characters (not bytes).
    cursor: usize,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// Takes the trimmed text and resets the composer.
    pub fn take(&mut self) -> String {
        let text = self.text.trim().to_string();
        self.text.clear();
        self.cursor = 0;
        text
    }

    pub fn insert(&mut self, c: char) {
        let byte_idx = self.byte_index(self.cursor);
        self.text.insert(byte_idx, c);
        self.cursor += 1;
    }

    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        let byte_idx = self.byte_index(self.cursor);
        self.text.remove(byte_idx);
    }

    pub fn delete(&mut self) {
        if self.cursor >= self.text.chars().count() {
            return;
        }
        let byte_idx = self.byte_index(self.cursor);
        self.text.remove(byte_idx);
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        let len = self.text.chars().count();
        self.cursor = (self.cursor + 1).min(len);
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.text.chars().count();
    }

    fn byte_index(&self, char_idx: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_idx)
            .map_or(self.text.len(), |(i, _)| i)
    }

    /// Display width of the text before the cursor.
    fn cursor_column(&self) -> usize {
        let byte_idx = self.byte_index(self.cursor);
        self.text[..byte_idx].width()
    }
}

/// Renders the composer with the selected agent's name on the border.
pub fn render_input(
    state: &InputState,
    agent_name: Option<&str>,
    activity: ChatActivity,
    frame: &mut Frame,
    area: Rect,
) {
    let title = match agent_name {
        Some(name) => format!(" Message {name} "),
        None => " No agent selected ".to_string(),
    };

    let border_color = if activity.is_waiting() {
        Color::DarkGray
    } else {
        Color::Cyan
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .title(title);
    let inner = block.inner(area);

    let content = if state.text.is_empty() && activity.is_waiting() {
        Line::from(Span::styled(
            "Waiting for reply...",
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        Line::from(Span::raw(state.text.clone()))
    };

    frame.render_widget(Paragraph::new(content).block(block), area);

    // Place the hardware cursor only when input is accepted.
    if !activity.is_waiting() && agent_name.is_some() {
        let col = inner.x + state.cursor_column().min(inner.width.saturating_sub(1) as usize) as u16;
        frame.set_cursor_position(Position::new(col, inner.y));
    }
}
