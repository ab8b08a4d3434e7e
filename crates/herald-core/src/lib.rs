//! # Herald Core
//!
//! An in-process publish/subscribe event dispatcher. Listeners are registered
//! against event names with an integer priority; a broadcast invokes every
//! matching listener synchronously, lowest priority first, until one of them
//! stops the event.
//!
//! ```
//! use herald_core::{Dispatcher, ListenerRef};
//!
//! let dispatcher = Dispatcher::new();
//! dispatcher.on("user.created", ListenerRef::from_fn(|event, _name, _dispatcher| {
//!     event.add_data("welcomed", true);
//!     Ok(())
//! }));
//!
//! let event = dispatcher.broadcast("user.created").unwrap();
//! assert_eq!(event.get_data("welcomed").unwrap(), &serde_json::json!(true));
//! ```
pub mod config;
pub mod error;
pub mod event;

// Re-export key public types for easier use by embedders
pub use config::{ConfigError, ConfigFormat, DispatcherConfig};
pub use error::{Error, Result};
pub use event::{
    create_dispatcher, BoxError, Dispatcher, Event, EventData, EventSystemError, Listener,
    ListenerRef, ListenerResult, Priority, SharedDispatcher, Subscriber, DEFAULT_PRIORITY,
};
