//! # Herald Core Errors
//!
//! Defines the crate-wide [`Error`], which wraps the typed errors of each
//! subsystem so embedders can propagate any of them with a single `?`.
use std::result::Result as StdResult;

use thiserror::Error as ThisError;

use crate::config::error::ConfigError;
use crate::event::error::EventSystemError;

/// Error type covering every failure the crate can report
#[derive(Debug, ThisError)]
pub enum Error {
    /// Event data lookups and listener failures
    #[error("Event system error: {0}")]
    EventSystem(#[from] EventSystemError),

    /// Loading or parsing dispatcher configuration
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Shorthand for Result with our Error type
pub type Result<T> = StdResult<T, Error>;
