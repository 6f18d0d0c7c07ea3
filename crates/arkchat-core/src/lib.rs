//! Core arkchat library (API client, data model, config, logging).

pub mod api;
pub mod config;
pub mod logging;
