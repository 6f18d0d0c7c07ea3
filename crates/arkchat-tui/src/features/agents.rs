//! Agent roster state and sidebar rendering.

use arkchat_core::api::Agent;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState};

/// Agent roster and selection.
///
/// Selection is tracked by index into `agents`; the list preserves server
/// order. `set_agents` keeps the selection pinned to the same agent id
/// across refreshes even if its position moved.
#[derive(Debug)]
pub struct AgentListState {
    pub agents: Vec<Agent>,
    pub selected: Option<usize>,
    /// True while the initial roster fetch is in flight.
    pub loading: bool,
}

impl AgentListState {
    pub fn new() -> Self {
        Self {
            agents: Vec::new(),
            selected: None,
            loading: true,
        }
    }

    /// Replaces the roster, preserving selection by agent id.
    ///
    /// Falls back to the first agent when the previously selected id is
    /// gone (or nothing was selected). Returns the id of the newly
    /// selected agent if the selection changed agents.
    pub fn set_agents(&mut self, agents: Vec<Agent>) -> Option<i64> {
        let previous_id = self.selected_agent().map(|a| a.id);
        self.agents = agents;

        if self.agents.is_empty() {
            self.selected = None;
            return None;
        }

        let index = previous_id
            .and_then(|id| self.agents.iter().position(|a| a.id == id))
            .unwrap_or(0);
        self.selected = Some(index);

        let current_id = self.agents[index].id;
        (previous_id != Some(current_id)).then_some(current_id)
    }

    /// Appends a freshly created agent and selects it.
    pub fn push_and_select(&mut self, agent: Agent) -> i64 {
        let id = agent.id;
        self.agents.push(agent);
        self.selected = Some(self.agents.len() - 1);
        id
    }

    pub fn selected_agent(&self) -> Option<&Agent> {
        self.selected.and_then(|i| self.agents.get(i))
    }

    /// Moves the selection one agent down (wrapping).
    ///
    /// Returns the id of the newly selected agent if it changed.
    pub fn select_next(&mut self) -> Option<i64> {
        self.step(1)
    }

    /// Moves the selection one agent up (wrapping).
    pub fn select_prev(&mut self) -> Option<i64> {
        self.step(-1)
    }

    fn step(&mut self, delta: isize) -> Option<i64> {
        if self.agents.len() < 2 {
            return None;
        }
        let current = self.selected.unwrap_or(0);
        let len = self.agents.len() as isize;
        let next = (current as isize + delta).rem_euclid(len) as usize;
        if next == current {
            return None;
        }
        self.selected = Some(next);
        Some(self.agents[next].id)
    }
}

impl Default for AgentListState {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders the agent sidebar.
pub fn render_sidebar(state: &AgentListState, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(" Agents ");

    if state.loading {
        let list = List::new([ListItem::new(Line::from(Span::styled(
            "Loading...",
            Style::default().fg(Color::DarkGray),
        )))])
        .block(block);
        frame.render_widget(list, area);
        return;
    }

    if state.agents.is_empty() {
        let list = List::new([ListItem::new(Line::from(Span::styled(
            "No agents. Ctrl+N to create one.",
            Style::default().fg(Color::DarkGray),
        )))])
        .block(block);
        frame.render_widget(list, area);
        return;
    }

    let items: Vec<ListItem> = state
        .agents
        .iter()
        .map(|agent| {
            ListItem::new(vec![
                Line::from(Span::raw(agent.name.clone())),
                Line::from(Span::styled(
                    agent.description.clone(),
                    Style::default().fg(Color::DarkGray),
                )),
            ])
        })
        .collect();

    let list = List::new(items).block(block).highlight_style(
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    );

    let mut list_state = ListState::default();
    list_state.select(state.selected);
    frame.render_stateful_widget(list, area, &mut list_state);
}
