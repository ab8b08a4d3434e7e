pub mod dispatcher;
pub mod error;
pub mod listener;
pub mod registry;
pub mod subscriber;
pub mod types;

/// Ordering key for listeners; lower values fire earlier
pub type Priority = i32;

/// Priority used by [`Dispatcher::on`]
pub const DEFAULT_PRIORITY: Priority = 0;

/// Re-export important types
pub use dispatcher::{create_dispatcher, Dispatcher, SharedDispatcher, CALLER_KEY};
pub use error::EventSystemError;
pub use listener::{BoxError, Listener, ListenerRef, ListenerResult};
pub use registry::ListenerRegistry;
pub use subscriber::Subscriber;
pub use types::{Event, EventData};

// Test module declaration
#[cfg(test)]
mod tests;
