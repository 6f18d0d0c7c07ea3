//! Transcript display state and rendering.
//!
//! The transcript is pre-wrapped into lines at the current width and then
//! sliced to the visible window, so scrolling works on wrapped lines rather
//! than logical turns.

use arkchat_core::api::{CHAT_ERROR_MESSAGE, ChatTurn, Role};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthChar;

/// Transcript state: the turns for the selected agent plus scroll position.
///
/// `scroll_offset` counts wrapped lines up from the bottom; zero means
/// follow-latest. Any transcript change snaps back to the bottom.
#[derive(Debug)]
pub struct TranscriptState {
    turns: Vec<ChatTurn>,
    pub scroll_offset: usize,
}

impl TranscriptState {
    pub fn new() -> Self {
        Self {
            turns: Vec::new(),
            scroll_offset: 0,
        }
    }

    pub fn turns(&self) -> &[ChatTurn] {
        &self.turns
    }

    /// Replaces the transcript (agent switch or initial load).
    pub fn set_turns(&mut self, turns: Vec<ChatTurn>) {
        self.turns = turns;
        self.scroll_offset = 0;
    }

    /// Appends one turn and snaps to the bottom.
    pub fn push(&mut self, turn: ChatTurn) {
        self.turns.push(turn);
        self.scroll_offset = 0;
    }

    /// Clears the display. The server-side history is untouched.
    pub fn clear(&mut self) {
        self.turns.clear();
        self.scroll_offset = 0;
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    pub fn scroll_up(&mut self, lines: usize) {
        self.scroll_offset = self.scroll_offset.saturating_add(lines);
    }

    pub fn scroll_down(&mut self, lines: usize) {
        self.scroll_offset = self.scroll_offset.saturating_sub(lines);
    }
}

impl Default for TranscriptState {
    fn default() -> Self {
        Self::new()
    }
}

/// Wraps text to `width` display columns, breaking on whitespace where
/// possible and mid-word when a single word exceeds the width.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec![text.to_string()];
    }

    let mut lines = Vec::new();
    for raw_line in text.split('\n') {
        if raw_line.is_empty() {
            lines.push(String::new());
            continue;
        }

        let mut current = String::new();
        let mut current_width = 0;
        for word in raw_line.split(' ') {
            let word_width: usize = word.chars().map(|c| c.width().unwrap_or(0)).sum();

            let sep_width = usize::from(!current.is_empty());
            if current_width + sep_width + word_width <= width {
                if !current.is_empty() {
                    current.push(' ');
                    current_width += 1;
                }
                current.push_str(word);
                current_width += word_width;
                continue;
            }

            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
                current_width = 0;
            }

            if word_width <= width {
                current.push_str(word);
                current_width = word_width;
                continue;
            }

            // Word longer than the line: hard-break on character widths.
            for c in word.chars() {
                let w = c.width().unwrap_or(0);
                if current_width + w > width && !current.is_empty() {
                    lines.push(std::mem::take(&mut current));
                    current_width = 0;
                }
                current.push(c);
                current_width += w;
            }
        }
        lines.push(current);
    }
    lines
}

/// Builds the full wrapped line list for the transcript.
fn build_lines(state: &TranscriptState, width: usize) -> Vec<Line<'static>> {
    let mut lines: Vec<Line<'static>> = Vec::new();

    for (i, turn) in state.turns().iter().enumerate() {
        if i > 0 {
            lines.push(Line::default());
        }

        let (label, label_color) = match turn.role {
            Role::User => ("You", Color::Cyan),
            Role::Assistant => ("Agent", Color::Green),
        };
        lines.push(Line::from(Span::styled(
            label,
            Style::default()
                .fg(label_color)
                .add_modifier(Modifier::BOLD),
        )));

        let body_style = if turn.message == CHAT_ERROR_MESSAGE {
            Style::default().fg(Color::Red)
        } else {
            Style::default()
        };
        for wrapped in wrap_text(&turn.message, width) {
            lines.push(Line::from(Span::styled(wrapped, body_style)));
        }
    }

    lines
}

/// Renders the transcript pane, bottom-aligned with scrollback.
pub fn render_transcript(
    state: &TranscriptState,
    loading: bool,
    frame: &mut Frame,
    area: Rect,
) {
    let width = area.width.saturating_sub(1) as usize;
    let height = area.height as usize;

    if loading {
        let line = Line::from(Span::styled(
            "Loading conversation...",
            Style::default().fg(Color::DarkGray),
        ));
        frame.render_widget(Paragraph::new(line), area);
        return;
    }

    if state.is_empty() {
        let line = Line::from(Span::styled(
            "No messages yet. Type below to start the conversation.",
            Style::default().fg(Color::DarkGray),
        ));
        frame.render_widget(Paragraph::new(line), area);
        return;
    }

    let all_lines = build_lines(state, width);
    let total = all_lines.len();

    // Clamp the offset so scrolling up stops at the first line.
    let max_offset = total.saturating_sub(height);
    let offset = state.scroll_offset.min(max_offset);
    let end = total - offset;
    let start = end.saturating_sub(height);

    let content: Vec<Line<'static>> = all_lines
        .into_iter()
        .skip(start)
        .take(end - start)
        .collect();

    // Bottom-align: pad at the top when content doesn't fill the pane.
    let visible: Vec<Line<'static>> = if content.len() < height {
        let mut padded = vec![Line::default(); height - content.len()];
        padded.extend(content);
        padded
    } else {
        content
    };

    frame.render_widget(Paragraph::new(visible), area);
}
