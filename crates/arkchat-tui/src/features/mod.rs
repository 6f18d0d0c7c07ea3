//! Feature modules for the TUI.
//!
//! Each feature owns its slice of state and its render function:
//! - `agents`: sidebar roster and selection
//! - `transcript`: conversation display and scrolling
//! - `input`: message composer
//! - `templates`: template browser view
//! - `analytics`: analytics placeholder view

pub mod agents;
pub mod analytics;
pub mod input;
pub mod templates;
pub mod transcript;
