//! Pure view/render functions for the TUI.
//!
//! This module contains all rendering logic. Functions here:
//! - Take `&AppState` by immutable reference
//! - Draw to a ratatui Frame
//! - Never mutate state or return effects

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::features::{agents, analytics, input, templates, transcript};
use crate::state::{AppState, ChatActivity, TuiState, View};

/// Width of the agent sidebar.
const SIDEBAR_WIDTH: u16 = 28;

/// Height of the agent header above the transcript.
const HEADER_HEIGHT: u16 = 1;

/// Height of the composer (content plus borders).
const INPUT_HEIGHT: u16 = 3;

/// Height of the status line below the composer.
const STATUS_HEIGHT: u16 = 1;

/// Spinner frames for status line animation.
const SPINNER_FRAMES: &[&str] = &["◐", "◓", "◑", "◒"];

/// Slows the spinner relative to the tick rate.
const SPINNER_SPEED_DIVISOR: usize = 4;

/// Renders the entire TUI to the frame.
pub fn render(app: &AppState, frame: &mut Frame) {
    let area = frame.area();
    let state = &app.tui;

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(1)])
        .split(area);

    agents::render_sidebar(&state.agents, frame, columns[0]);

    match state.view {
        View::Chat => render_chat(state, frame, columns[1]),
        View::Templates => templates::render_templates(&state.templates, frame, columns[1]),
        View::Analytics => analytics::render_analytics(frame, columns[1]),
    }

    // Overlay last, so it appears on top.
    if let Some(overlay) = &app.overlay {
        overlay.render(frame, area);
    }
}

fn render_chat(state: &TuiState, frame: &mut Frame, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT), // Agent header
            Constraint::Min(1),                // Transcript
            Constraint::Length(INPUT_HEIGHT),  // Composer
            Constraint::Length(STATUS_HEIGHT), // Status line
        ])
        .split(area);

    render_chat_header(state, frame, chunks[0]);

    match state.agents.selected_agent() {
        Some(_) => transcript::render_transcript(
            &state.transcript,
            state.loading_conversation,
            frame,
            chunks[1],
        ),
        None => {
            let hint = Paragraph::new(Line::from(Span::styled(
                "Select an agent or create a new one (Ctrl+N).",
                Style::default().fg(Color::DarkGray),
            )));
            frame.render_widget(hint, chunks[1]);
        }
    }

    let agent_name = state.agents.selected_agent().map(|a| a.name.as_str());
    input::render_input(&state.input, agent_name, state.activity, frame, chunks[2]);

    render_status_line(state, frame, chunks[3]);
}

/// Renders the selected agent's name and description above the transcript.
fn render_chat_header(state: &TuiState, frame: &mut Frame, area: Rect) {
    let line = match state.agents.selected_agent() {
        Some(agent) => Line::from(vec![
            Span::styled(agent.name.clone(), Style::default().fg(Color::Cyan)),
            Span::raw("  "),
            Span::styled(
                agent.description.clone(),
                Style::default().fg(Color::DarkGray),
            ),
        ]),
        None => Line::from(Span::styled(
            "ArkChat",
            Style::default().fg(Color::Cyan),
        )),
    };
    frame.render_widget(Paragraph::new(line), area);
}

fn spinner(state: &TuiState) -> &'static str {
    SPINNER_FRAMES[(state.spinner_frame / SPINNER_SPEED_DIVISOR) % SPINNER_FRAMES.len()]
}

/// Renders the status line below the composer.
fn render_status_line(state: &TuiState, frame: &mut Frame, area: Rect) {
    let spans: Vec<Span> = if let ChatActivity::Waiting { .. } = state.activity {
        vec![
            Span::styled(spinner(state), Style::default().fg(Color::Yellow)),
            Span::raw(" "),
            Span::styled("Waiting for reply...", Style::default().fg(Color::Yellow)),
        ]
    } else if state.loading_conversation {
        vec![
            Span::styled(spinner(state), Style::default().fg(Color::Cyan)),
            Span::raw(" "),
            Span::styled("Loading conversation...", Style::default().fg(Color::Cyan)),
        ]
    } else {
        vec![
            Span::styled("Alt+↑/↓", Style::default().fg(Color::DarkGray)),
            Span::raw(" switch agent  "),
            Span::styled("Ctrl+N", Style::default().fg(Color::DarkGray)),
            Span::raw(" new  "),
            Span::styled("Ctrl+T", Style::default().fg(Color::DarkGray)),
            Span::raw(" templates  "),
            Span::styled("Ctrl+L", Style::default().fg(Color::DarkGray)),
            Span::raw(" clear  "),
            Span::styled("Ctrl+C", Style::default().fg(Color::DarkGray)),
            Span::raw(" quit"),
        ]
    };

    let status = Paragraph::new(Line::from(spans)).alignment(Alignment::Left);
    frame.render_widget(status, area);
}
