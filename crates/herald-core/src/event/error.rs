//! # Herald Event System Errors
//!
//! Defines [`EventSystemError`], the errors raised while reading event data or
//! while broadcasting. Registration and removal never fail, so nothing here
//! concerns the listener registry itself.
use thiserror::Error;

use crate::event::listener::BoxError;

#[derive(Debug, Error)]
pub enum EventSystemError {
    #[error("No data for key '{key}' on event '{event_name}'")]
    MissingData { event_name: String, key: String },

    #[error("Invalid data for key '{key}' on event '{event_name}': {details}")]
    InvalidEventData {
        event_name: String,
        key: String,
        details: String,
    },

    #[error("Listener failed while handling event '{event_name}': {source}")]
    ListenerFailed {
        event_name: String,
        #[source]
        source: BoxError,
    },
}

impl EventSystemError {
    /// Name of the event the error was raised for
    pub fn event_name(&self) -> &str {
        match self {
            EventSystemError::MissingData { event_name, .. }
            | EventSystemError::InvalidEventData { event_name, .. }
            | EventSystemError::ListenerFailed { event_name, .. } => event_name,
        }
    }
}
