//! TUI reducer (update function).
//!
//! All state mutations happen here. The runtime calls `update(app, event)`
//! and executes the returned effects.
//!
//! This is the single source of truth for how events modify state. Two
//! invariants worth calling out:
//!
//! - Results of async operations are tagged with the agent id they were
//!   dispatched for; completions whose agent no longer matches the current
//!   selection are discarded.
//! - Every sent message eventually yields exactly one reply turn: the
//!   agent's text on success, the fixed error turn on failure.

use arkchat_core::api::{ChatTurn, template_catalog};
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::effects::UiEffect;
use crate::events::{CreateOrigin, UiEvent};
use crate::overlays::{AgentFormState, ConfirmClearState, Overlay, OverlayTransition};
use crate::state::{AppState, ChatActivity, TuiState, View};

/// Lines scrolled per PageUp/PageDown.
const PAGE_SCROLL_LINES: usize = 10;

/// The main reducer function.
///
/// Takes the current state and an event, mutates state, and returns effects
/// for the runtime to execute.
pub fn update(app: &mut AppState, event: UiEvent) -> Vec<UiEffect> {
    match event {
        UiEvent::Tick => {
            app.tui.spinner_frame = app.tui.spinner_frame.wrapping_add(1);
            vec![]
        }
        UiEvent::Terminal(term_event) => handle_terminal_event(app, term_event),
        UiEvent::AgentsLoaded(result) => handle_agents_loaded(&mut app.tui, result),
        UiEvent::ConversationLoaded { agent_id, result } => {
            handle_conversation_loaded(&mut app.tui, agent_id, result)
        }
        UiEvent::AgentCreated { origin, result } => handle_agent_created(app, origin, result),
        UiEvent::ChatCompleted { agent_id, result } => {
            handle_chat_completed(&mut app.tui, agent_id, result)
        }
    }
}

// ============================================================================
// Terminal input
// ============================================================================

fn handle_terminal_event(app: &mut AppState, event: Event) -> Vec<UiEffect> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key(app, key),
        _ => vec![],
    }
}

fn handle_key(app: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let alt = key.modifiers.contains(KeyModifiers::ALT);

    // Quit works everywhere, overlays included.
    if ctrl && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('q')) {
        return vec![UiEffect::Quit];
    }

    // Overlays capture all remaining input while active.
    if let Some(overlay) = &mut app.overlay {
        let update = overlay.handle_key(&mut app.tui, key);
        if matches!(update.transition, OverlayTransition::Close) {
            app.overlay = None;
        }
        return update.effects;
    }

    // Global navigation
    if ctrl {
        match key.code {
            KeyCode::Char('n') => {
                app.overlay = Some(Overlay::AgentForm(AgentFormState::open()));
                return vec![];
            }
            KeyCode::Char('t') => {
                app.tui.view = View::Templates;
                return vec![];
            }
            KeyCode::Char('g') => {
                app.tui.view = View::Analytics;
                return vec![];
            }
            KeyCode::Char('l') => {
                if app.tui.view == View::Chat
                    && let Some(agent) = app.tui.agents.selected_agent()
                {
                    app.overlay = Some(Overlay::ConfirmClear(ConfirmClearState::open(
                        agent.name.clone(),
                    )));
                }
                return vec![];
            }
            _ => {}
        }
    }

    if alt {
        match key.code {
            KeyCode::Down => {
                if let Some(id) = app.tui.agents.select_next() {
                    return selection_changed(&mut app.tui, id);
                }
                return vec![];
            }
            KeyCode::Up => {
                if let Some(id) = app.tui.agents.select_prev() {
                    return selection_changed(&mut app.tui, id);
                }
                return vec![];
            }
            _ => {}
        }
    }

    if key.code == KeyCode::Esc && app.tui.view != View::Chat {
        app.tui.view = View::Chat;
        return vec![];
    }

    match app.tui.view {
        View::Chat => handle_chat_key(&mut app.tui, key),
        View::Templates => handle_templates_key(&mut app.tui, key),
        View::Analytics => vec![],
    }
}

fn handle_chat_key(tui: &mut TuiState, key: KeyEvent) -> Vec<UiEffect> {
    // Transcript scrolling works regardless of activity.
    match key.code {
        KeyCode::Up => {
            tui.transcript.scroll_up(1);
            return vec![];
        }
        KeyCode::Down => {
            tui.transcript.scroll_down(1);
            return vec![];
        }
        KeyCode::PageUp => {
            tui.transcript.scroll_up(PAGE_SCROLL_LINES);
            return vec![];
        }
        KeyCode::PageDown => {
            tui.transcript.scroll_down(PAGE_SCROLL_LINES);
            return vec![];
        }
        _ => {}
    }

    // The composer is locked while a reply is pending.
    if tui.activity.is_waiting() {
        return vec![];
    }

    match key.code {
        KeyCode::Enter => {
            let Some(agent) = tui.agents.selected_agent() else {
                return vec![];
            };
            if tui.input.is_blank() {
                return vec![];
            }
            let agent_id = agent.id;
            let message = tui.input.take();

            // Optimistic append: the user's turn shows immediately.
            tui.transcript.push(ChatTurn::user(message.clone()));
            tui.activity = ChatActivity::Waiting { agent_id };
            vec![UiEffect::SendChat { agent_id, message }]
        }
        KeyCode::Backspace => {
            tui.input.backspace();
            vec![]
        }
        KeyCode::Delete => {
            tui.input.delete();
            vec![]
        }
        KeyCode::Left => {
            tui.input.move_left();
            vec![]
        }
        KeyCode::Right => {
            tui.input.move_right();
            vec![]
        }
        KeyCode::Home => {
            tui.input.move_home();
            vec![]
        }
        KeyCode::End => {
            tui.input.move_end();
            vec![]
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            tui.input.insert(c);
            vec![]
        }
        _ => vec![],
    }
}

fn handle_templates_key(tui: &mut TuiState, key: KeyEvent) -> Vec<UiEffect> {
    match key.code {
        KeyCode::Down => {
            tui.templates.select_next();
            vec![]
        }
        KeyCode::Up => {
            tui.templates.select_prev();
            vec![]
        }
        KeyCode::Enter => {
            if tui.templates.creating {
                return vec![];
            }
            let Some(template) = template_catalog().get(tui.templates.selected) else {
                return vec![];
            };
            tui.templates.creating = true;
            tui.templates.error = None;
            vec![UiEffect::CreateAgent {
                origin: CreateOrigin::Template,
                request: template.to_request(),
            }]
        }
        _ => vec![],
    }
}

// ============================================================================
// Selection changes
// ============================================================================

/// Applies an agent selection change: reset the transcript, drop any
/// pending chat request (its completion becomes stale), and fetch the new
/// agent's history.
fn selection_changed(tui: &mut TuiState, agent_id: i64) -> Vec<UiEffect> {
    tui.transcript.clear();
    tui.activity = ChatActivity::Idle;
    tui.loading_conversation = true;
    vec![UiEffect::LoadConversation { agent_id }]
}

// ============================================================================
// Async completions
// ============================================================================

fn handle_agents_loaded(
    tui: &mut TuiState,
    result: Result<Vec<arkchat_core::api::Agent>, String>,
) -> Vec<UiEffect> {
    tui.agents.loading = false;
    match result {
        Ok(agents) => {
            if let Some(id) = tui.agents.set_agents(agents) {
                return selection_changed(tui, id);
            }
            vec![]
        }
        Err(error) => {
            // Degrade silently: the sidebar stays empty, details go to the log.
            tracing::warn!(%error, "failed to load agents");
            vec![]
        }
    }
}

fn handle_conversation_loaded(
    tui: &mut TuiState,
    agent_id: i64,
    result: Result<Vec<ChatTurn>, String>,
) -> Vec<UiEffect> {
    let current = tui.agents.selected_agent().map(|a| a.id);
    if current != Some(agent_id) {
        tracing::debug!(agent_id, "discarding conversation for deselected agent");
        return vec![];
    }

    tui.loading_conversation = false;
    match result {
        Ok(turns) => tui.transcript.set_turns(turns),
        Err(error) => {
            tracing::warn!(%error, agent_id, "failed to load conversation");
            tui.transcript.set_turns(Vec::new());
        }
    }
    vec![]
}

fn handle_agent_created(
    app: &mut AppState,
    origin: CreateOrigin,
    result: Result<arkchat_core::api::Agent, String>,
) -> Vec<UiEffect> {
    match result {
        Ok(agent) => {
            app.tui.templates.creating = false;
            if origin == CreateOrigin::Form && matches!(app.overlay, Some(Overlay::AgentForm(_))) {
                app.overlay = None;
            }
            // Either path lands on the new agent's chat.
            app.tui.view = View::Chat;
            let id = app.tui.agents.push_and_select(agent);
            selection_changed(&mut app.tui, id)
        }
        Err(error) => {
            match origin {
                CreateOrigin::Form => {
                    if let Some(Overlay::AgentForm(form)) = &mut app.overlay {
                        form.submit_failed(error);
                    } else {
                        tracing::warn!(%error, "agent creation failed after form closed");
                    }
                }
                CreateOrigin::Template => {
                    app.tui.templates.creating = false;
                    app.tui.templates.error = Some(error);
                }
            }
            vec![]
        }
    }
}

fn handle_chat_completed(
    tui: &mut TuiState,
    agent_id: i64,
    result: Result<String, String>,
) -> Vec<UiEffect> {
    let waiting_for = match tui.activity {
        ChatActivity::Waiting { agent_id } => Some(agent_id),
        ChatActivity::Idle => None,
    };
    let current = tui.agents.selected_agent().map(|a| a.id);
    if waiting_for != Some(agent_id) || current != Some(agent_id) {
        tracing::debug!(agent_id, "discarding stale chat completion");
        return vec![];
    }

    tui.activity = ChatActivity::Idle;
    match result {
        Ok(reply) => tui.transcript.push(ChatTurn::assistant(reply)),
        Err(error) => {
            tracing::warn!(%error, agent_id, "chat request failed");
            tui.transcript.push(ChatTurn::error());
        }
    }
    vec![]
}

#[cfg(test)]
mod tests {
    use arkchat_core::api::{Agent, CHAT_ERROR_MESSAGE, Role};

    use super::*;

    fn key(code: KeyCode) -> UiEvent {
        UiEvent::Terminal(Event::Key(KeyEvent::new(code, KeyModifiers::NONE)))
    }

    fn key_with(code: KeyCode, modifiers: KeyModifiers) -> UiEvent {
        UiEvent::Terminal(Event::Key(KeyEvent::new(code, modifiers)))
    }

    fn agent(id: i64, name: &str) -> Agent {
        Agent {
            id,
            name: name.to_string(),
            description: String::new(),
            system_prompt: None,
        }
    }

    /// App with a loaded roster, selected agent 1, empty transcript, idle.
    fn app_with_agents() -> AppState {
        let mut app = AppState::new();
        update(
            &mut app,
            UiEvent::AgentsLoaded(Ok(vec![agent(1, "One"), agent(2, "Two")])),
        );
        update(
            &mut app,
            UiEvent::ConversationLoaded {
                agent_id: 1,
                result: Ok(Vec::new()),
            },
        );
        app
    }

    fn type_text(app: &mut AppState, text: &str) {
        for c in text.chars() {
            update(app, key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn test_initial_roster_selects_first_and_loads_conversation() {
        let mut app = AppState::new();
        let effects = update(
            &mut app,
            UiEvent::AgentsLoaded(Ok(vec![agent(1, "One"), agent(2, "Two")])),
        );
        assert!(matches!(
            effects.as_slice(),
            [UiEffect::LoadConversation { agent_id: 1 }]
        ));
        assert!(app.tui.loading_conversation);
        assert!(!app.tui.agents.loading);
    }

    #[test]
    fn test_roster_load_failure_degrades_silently() {
        let mut app = AppState::new();
        let effects = update(&mut app, UiEvent::AgentsLoaded(Err("boom".to_string())));
        assert!(effects.is_empty());
        assert!(!app.tui.agents.loading);
        assert!(app.tui.agents.agents.is_empty());
    }

    #[test]
    fn test_send_appends_user_turn_optimistically() {
        let mut app = app_with_agents();
        type_text(&mut app, "hello there");
        let effects = update(&mut app, key(KeyCode::Enter));

        assert_eq!(app.tui.transcript.turns().len(), 1);
        assert_eq!(app.tui.transcript.turns()[0].role, Role::User);
        assert_eq!(app.tui.transcript.turns()[0].message, "hello there");
        assert!(app.tui.input.is_blank());
        assert_eq!(app.tui.activity, ChatActivity::Waiting { agent_id: 1 });
        match effects.as_slice() {
            [UiEffect::SendChat { agent_id: 1, message }] => assert_eq!(message, "hello there"),
            other => panic!("unexpected effects: {other:?}"),
        }
    }

    #[test]
    fn test_blank_input_is_not_sent() {
        let mut app = app_with_agents();
        type_text(&mut app, "   ");
        let effects = update(&mut app, key(KeyCode::Enter));
        assert!(effects.is_empty());
        assert!(app.tui.transcript.is_empty());
        assert_eq!(app.tui.activity, ChatActivity::Idle);
    }

    #[test]
    fn test_send_blocked_while_waiting() {
        let mut app = app_with_agents();
        type_text(&mut app, "first");
        update(&mut app, key(KeyCode::Enter));

        // Composer is locked: typing and Enter are ignored.
        type_text(&mut app, "second");
        let effects = update(&mut app, key(KeyCode::Enter));
        assert!(effects.is_empty());
        assert_eq!(app.tui.transcript.turns().len(), 1);
    }

    #[test]
    fn test_reply_appends_assistant_turn_and_unlocks() {
        let mut app = app_with_agents();
        type_text(&mut app, "hi");
        update(&mut app, key(KeyCode::Enter));

        update(
            &mut app,
            UiEvent::ChatCompleted {
                agent_id: 1,
                result: Ok("Hello!".to_string()),
            },
        );
        assert_eq!(app.tui.activity, ChatActivity::Idle);
        assert_eq!(app.tui.transcript.turns().len(), 2);
        assert_eq!(app.tui.transcript.turns()[1].role, Role::Assistant);
        assert_eq!(app.tui.transcript.turns()[1].message, "Hello!");
    }

    #[test]
    fn test_failed_chat_appends_fixed_error_turn() {
        let mut app = app_with_agents();
        type_text(&mut app, "hi");
        update(&mut app, key(KeyCode::Enter));

        update(
            &mut app,
            UiEvent::ChatCompleted {
                agent_id: 1,
                result: Err("timeout".to_string()),
            },
        );
        assert_eq!(app.tui.activity, ChatActivity::Idle);
        assert_eq!(app.tui.transcript.turns()[1].message, CHAT_ERROR_MESSAGE);
    }

    #[test]
    fn test_stale_chat_completion_is_discarded_after_switch() {
        let mut app = app_with_agents();
        type_text(&mut app, "hi");
        update(&mut app, key(KeyCode::Enter));

        // Switch to agent 2 while the reply is pending.
        update(&mut app, key_with(KeyCode::Down, KeyModifiers::ALT));
        update(
            &mut app,
            UiEvent::ConversationLoaded {
                agent_id: 2,
                result: Ok(Vec::new()),
            },
        );

        // The old agent's reply must not land in agent 2's transcript.
        update(
            &mut app,
            UiEvent::ChatCompleted {
                agent_id: 1,
                result: Ok("late reply".to_string()),
            },
        );
        assert!(app.tui.transcript.is_empty());
        assert_eq!(app.tui.activity, ChatActivity::Idle);
    }

    #[test]
    fn test_switching_agents_loads_their_conversation() {
        let mut app = app_with_agents();
        let effects = update(&mut app, key_with(KeyCode::Down, KeyModifiers::ALT));
        assert!(matches!(
            effects.as_slice(),
            [UiEffect::LoadConversation { agent_id: 2 }]
        ));
        assert!(app.tui.loading_conversation);
        assert!(app.tui.transcript.is_empty());
    }

    #[test]
    fn test_stale_conversation_load_is_discarded() {
        let mut app = app_with_agents();
        update(&mut app, key_with(KeyCode::Down, KeyModifiers::ALT));
        // Rapid cycle back to agent 1 before agent 2's history arrived.
        update(&mut app, key_with(KeyCode::Up, KeyModifiers::ALT));

        update(
            &mut app,
            UiEvent::ConversationLoaded {
                agent_id: 2,
                result: Ok(vec![ChatTurn::user("agent two history")]),
            },
        );
        // Still loading agent 1's history; agent 2's never rendered.
        assert!(app.tui.transcript.is_empty());
        assert!(app.tui.loading_conversation);

        update(
            &mut app,
            UiEvent::ConversationLoaded {
                agent_id: 1,
                result: Ok(vec![ChatTurn::user("agent one history")]),
            },
        );
        assert!(!app.tui.loading_conversation);
        assert_eq!(app.tui.transcript.turns()[0].message, "agent one history");
    }

    #[test]
    fn test_conversation_load_failure_shows_empty_transcript() {
        let mut app = app_with_agents();
        update(&mut app, key_with(KeyCode::Down, KeyModifiers::ALT));
        update(
            &mut app,
            UiEvent::ConversationLoaded {
                agent_id: 2,
                result: Err("boom".to_string()),
            },
        );
        assert!(!app.tui.loading_conversation);
        assert!(app.tui.transcript.is_empty());
    }

    #[test]
    fn test_create_from_form_selects_agent_and_closes_overlay() {
        let mut app = app_with_agents();
        update(&mut app, key_with(KeyCode::Char('n'), KeyModifiers::CONTROL));
        assert!(matches!(app.overlay, Some(Overlay::AgentForm(_))));

        type_text(&mut app, "Fresh");
        update(&mut app, key(KeyCode::Enter));

        let effects = update(
            &mut app,
            UiEvent::AgentCreated {
                origin: CreateOrigin::Form,
                result: Ok(agent(9, "Fresh")),
            },
        );
        assert!(app.overlay.is_none());
        assert_eq!(app.tui.view, View::Chat);
        assert_eq!(app.tui.agents.selected_agent().map(|a| a.id), Some(9));
        assert!(matches!(
            effects.as_slice(),
            [UiEffect::LoadConversation { agent_id: 9 }]
        ));
    }

    #[test]
    fn test_create_failure_keeps_form_open_with_error() {
        let mut app = app_with_agents();
        update(&mut app, key_with(KeyCode::Char('n'), KeyModifiers::CONTROL));
        type_text(&mut app, "Fresh");
        update(&mut app, key(KeyCode::Enter));

        update(
            &mut app,
            UiEvent::AgentCreated {
                origin: CreateOrigin::Form,
                result: Err("Request failed with status 500".to_string()),
            },
        );
        match &app.overlay {
            Some(Overlay::AgentForm(form)) => {
                assert!(!form.submitting);
                assert_eq!(form.error.as_deref(), Some("Request failed with status 500"));
                assert_eq!(form.name, "Fresh");
            }
            other => panic!("expected form overlay, got {other:?}"),
        }
    }

    #[test]
    fn test_create_from_template_selects_and_returns_to_chat() {
        let mut app = app_with_agents();
        update(&mut app, key_with(KeyCode::Char('t'), KeyModifiers::CONTROL));
        assert_eq!(app.tui.view, View::Templates);

        let effects = update(&mut app, key(KeyCode::Enter));
        assert!(app.tui.templates.creating);
        assert!(matches!(
            effects.as_slice(),
            [UiEffect::CreateAgent {
                origin: CreateOrigin::Template,
                ..
            }]
        ));

        // Enter is ignored while the request is in flight.
        let effects = update(&mut app, key(KeyCode::Enter));
        assert!(effects.is_empty());

        update(
            &mut app,
            UiEvent::AgentCreated {
                origin: CreateOrigin::Template,
                result: Ok(agent(9, "Sales Assistant")),
            },
        );
        assert!(!app.tui.templates.creating);
        assert_eq!(app.tui.view, View::Chat);
        assert_eq!(app.tui.agents.selected_agent().map(|a| a.id), Some(9));
    }

    #[test]
    fn test_template_create_failure_shows_inline_error() {
        let mut app = app_with_agents();
        update(&mut app, key_with(KeyCode::Char('t'), KeyModifiers::CONTROL));
        update(&mut app, key(KeyCode::Enter));

        update(
            &mut app,
            UiEvent::AgentCreated {
                origin: CreateOrigin::Template,
                result: Err("boom".to_string()),
            },
        );
        assert!(!app.tui.templates.creating);
        assert_eq!(app.tui.templates.error.as_deref(), Some("boom"));
        assert_eq!(app.tui.view, View::Templates);

        // Retrying clears the error.
        update(&mut app, key(KeyCode::Enter));
        assert!(app.tui.templates.error.is_none());
    }

    #[test]
    fn test_clear_requires_confirmation() {
        let mut app = app_with_agents();
        type_text(&mut app, "hi");
        update(&mut app, key(KeyCode::Enter));
        update(
            &mut app,
            UiEvent::ChatCompleted {
                agent_id: 1,
                result: Ok("hello".to_string()),
            },
        );
        assert_eq!(app.tui.transcript.turns().len(), 2);

        update(&mut app, key_with(KeyCode::Char('l'), KeyModifiers::CONTROL));
        assert!(matches!(app.overlay, Some(Overlay::ConfirmClear(_))));
        // Still intact until confirmed
        assert_eq!(app.tui.transcript.turns().len(), 2);

        update(&mut app, key(KeyCode::Enter));
        assert!(app.overlay.is_none());
        assert!(app.tui.transcript.is_empty());
    }

    #[test]
    fn test_clear_cancel_keeps_transcript() {
        let mut app = app_with_agents();
        type_text(&mut app, "hi");
        update(&mut app, key(KeyCode::Enter));

        update(&mut app, key_with(KeyCode::Char('l'), KeyModifiers::CONTROL));
        update(&mut app, key(KeyCode::Esc));
        assert!(app.overlay.is_none());
        assert_eq!(app.tui.transcript.turns().len(), 1);
    }

    #[test]
    fn test_quit_keys() {
        let mut app = AppState::new();
        let effects = update(&mut app, key_with(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(matches!(effects.as_slice(), [UiEffect::Quit]));
        let effects = update(&mut app, key_with(KeyCode::Char('q'), KeyModifiers::CONTROL));
        assert!(matches!(effects.as_slice(), [UiEffect::Quit]));
    }

    #[test]
    fn test_esc_returns_to_chat_view() {
        let mut app = app_with_agents();
        update(&mut app, key_with(KeyCode::Char('g'), KeyModifiers::CONTROL));
        assert_eq!(app.tui.view, View::Analytics);
        update(&mut app, key(KeyCode::Esc));
        assert_eq!(app.tui.view, View::Chat);
    }

    #[test]
    fn test_send_without_agent_is_noop() {
        let mut app = AppState::new();
        update(&mut app, UiEvent::AgentsLoaded(Ok(Vec::new())));
        type_text(&mut app, "hello");
        let effects = update(&mut app, key(KeyCode::Enter));
        assert!(effects.is_empty());
        assert!(app.tui.transcript.is_empty());
    }
}
