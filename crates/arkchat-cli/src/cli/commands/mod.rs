//! Command handlers.

pub mod agents;
pub mod chat;
pub mod config;
