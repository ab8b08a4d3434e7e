use std::any;
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use log::{debug, log, warn};
use serde_json::Value;

use crate::config::DispatcherConfig;
use crate::event::error::EventSystemError;
use crate::event::listener::ListenerRef;
use crate::event::registry::ListenerRegistry;
use crate::event::subscriber::Subscriber;
use crate::event::types::{Event, EventData};
use crate::event::{Priority, DEFAULT_PRIORITY};

/// Key under which [`Dispatcher::broadcast`] records who built the event
pub const CALLER_KEY: &str = "caller";

/// Registers listeners against event names and broadcasts events to them.
///
/// Every method takes `&self`. The registry sits behind one mutex that is
/// never held while a listener runs, so listeners receive the dispatcher and
/// may register, remove, or broadcast from inside an invocation.
pub struct Dispatcher {
    config: DispatcherConfig,
    caller: String,
    registry: Mutex<ListenerRegistry>,
}

// Manual Debug implementation for Dispatcher
impl fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dispatcher")
            .field("caller", &self.caller)
            .field("registry", &*self.registry())
            .finish()
    }
}

impl Dispatcher {
    pub fn new() -> Self {
        Self::with_config(DispatcherConfig::default())
    }

    pub fn with_config(config: DispatcherConfig) -> Self {
        let caller = config
            .caller
            .clone()
            .unwrap_or_else(|| any::type_name::<Self>().to_string());
        Self {
            config,
            caller,
            registry: Mutex::new(ListenerRegistry::new()),
        }
    }

    pub fn config(&self) -> &DispatcherConfig {
        &self.config
    }

    /// Identity recorded under [`CALLER_KEY`] in events built by `broadcast`
    pub fn caller(&self) -> &str {
        &self.caller
    }

    // Nothing panics while the guard is held, so a poisoned registry is still consistent.
    fn registry(&self) -> MutexGuard<'_, ListenerRegistry> {
        self.registry.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Register a listener at the default priority
    pub fn on(&self, event_name: &str, listener: ListenerRef) {
        self.on_with_priority(event_name, listener, DEFAULT_PRIORITY);
    }

    /// Register a listener. Lower priorities fire first; listeners sharing a
    /// priority fire in registration order. Registering the same listener
    /// twice makes it fire twice.
    pub fn on_with_priority(&self, event_name: &str, listener: ListenerRef, priority: Priority) {
        debug!("Registering listener for '{}' at priority {}", event_name, priority);
        self.registry().add(event_name, listener, priority);
    }

    pub fn has_listeners(&self, event_name: &str) -> bool {
        self.registry().has_listeners(event_name)
    }

    /// Listener groups for `event_name`, ascending by priority. Each group
    /// keeps registration order. Empty for an unknown event name.
    pub fn get_listeners(&self, event_name: &str) -> Vec<Vec<ListenerRef>> {
        self.registry().groups(event_name)
    }

    /// [`get_listeners`](Self::get_listeners) for every registered event name
    pub fn all_listeners(&self) -> HashMap<String, Vec<Vec<ListenerRef>>> {
        self.registry().all_groups()
    }

    /// Priority `listener` is registered at for `event_name`.
    ///
    /// If it is registered at several priorities the lowest one is returned.
    /// `None` when the event name or the listener is unknown.
    pub fn get_listener_priority(&self, event_name: &str, listener: &ListenerRef) -> Option<Priority> {
        self.registry().priority_of(event_name, listener)
    }

    /// Remove every registration of `listener` for `event_name`.
    /// Unknown event names and listeners are ignored.
    pub fn remove_listener(&self, event_name: &str, listener: &ListenerRef) {
        let removed = self.registry().remove(event_name, listener);
        debug!("Removed {} registration(s) of listener for '{}'", removed, event_name);
    }

    /// Total registrations for `event_name`, counting duplicates
    pub fn listener_count(&self, event_name: &str) -> usize {
        self.registry().count(event_name)
    }

    /// Event names with at least one listener, in no particular order
    pub fn event_names(&self) -> Vec<String> {
        self.registry().event_names()
    }

    pub fn add_subscriber(&self, subscriber: &dyn Subscriber) {
        debug!("Adding subscriber");
        subscriber.subscribe(self);
    }

    pub fn remove_subscriber(&self, subscriber: &dyn Subscriber) {
        debug!("Removing subscriber");
        subscriber.unsubscribe(self);
    }

    /// Broadcast a fresh event named `event_name`.
    ///
    /// The event's data bag starts with this dispatcher's [`caller`](Self::caller)
    /// under [`CALLER_KEY`].
    pub fn broadcast(&self, event_name: &str) -> Result<Event, EventSystemError> {
        let mut data = EventData::new();
        data.insert(CALLER_KEY.to_string(), Value::String(self.caller.clone()));
        self.broadcast_event(event_name, Event::with_data(event_name, data))
    }

    /// Broadcast a caller-built event to the listeners of `event_name`.
    ///
    /// The listener order is fixed before the first invocation: changes made
    /// to the registry by a listener apply from the next broadcast on. The
    /// stop flag is checked before each invocation. A failing listener ends
    /// the broadcast and its error is returned in place of the event.
    pub fn broadcast_event(&self, event_name: &str, mut event: Event) -> Result<Event, EventSystemError> {
        let listeners = self.registry().resolve(event_name);
        if listeners.is_empty() {
            return Ok(event);
        }

        let level = self.config.invocation_log_level;
        for (index, listener) in listeners.iter().enumerate() {
            if event.is_stopped() {
                debug!(
                    "Propagation of '{}' stopped; skipping {} listener(s)",
                    event_name,
                    listeners.len() - index
                );
                break;
            }

            if let Some(level) = level.to_level() {
                log!(level, "Invoking listener {}/{} for '{}'", index + 1, listeners.len(), event_name);
            }

            if let Err(source) = listener.invoke(&mut event, event_name, self) {
                warn!("Listener {}/{} for '{}' failed: {}", index + 1, listeners.len(), event_name, source);
                return Err(EventSystemError::ListenerFailed {
                    event_name: event_name.to_string(),
                    source,
                });
            }
        }

        Ok(event)
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new()
    }
}

/// Dispatcher shared between several owners
pub type SharedDispatcher = Arc<Dispatcher>;

/// Create a new shared dispatcher instance
pub fn create_dispatcher() -> SharedDispatcher {
    Arc::new(Dispatcher::new())
}
