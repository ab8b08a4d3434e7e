use std::fmt;
use std::sync::Arc;

use crate::event::dispatcher::Dispatcher;
use crate::event::types::Event;

/// Boxed error a listener may fail with
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Result returned by a listener invocation
pub type ListenerResult = Result<(), BoxError>;

/// Something that reacts to a broadcast.
///
/// Implement this for stateful listener objects; plain closures go through
/// [`ListenerRef::from_fn`]. Returning an error aborts the rest of the
/// broadcast and hands the error to the broadcaster's caller.
pub trait Listener: Send + Sync {
    fn invoke(&self, event: &mut Event, event_name: &str, dispatcher: &Dispatcher) -> ListenerResult;
}

/// Adapter turning a closure into a [`Listener`] (Internal Helper)
struct FnListener<F> {
    handler: F,
}

impl<F> Listener for FnListener<F>
where
    F: Fn(&mut Event, &str, &Dispatcher) -> ListenerResult + Send + Sync,
{
    fn invoke(&self, event: &mut Event, event_name: &str, dispatcher: &Dispatcher) -> ListenerResult {
        (self.handler)(event, event_name, dispatcher)
    }
}

/// Shared handle to a registered listener.
///
/// Equality is identity: two handles are equal only when they were cloned from
/// the same [`ListenerRef`], no matter what the listeners do. Keep a clone of
/// the handle passed to `on` to look the listener up or remove it later.
#[derive(Clone)]
pub struct ListenerRef {
    inner: Arc<dyn Listener>,
}

impl ListenerRef {
    /// Wrap a listener object
    pub fn new<L: Listener + 'static>(listener: L) -> Self {
        Self {
            inner: Arc::new(listener),
        }
    }

    /// Wrap a plain closure
    pub fn from_fn<F>(handler: F) -> Self
    where
        F: Fn(&mut Event, &str, &Dispatcher) -> ListenerResult + Send + Sync + 'static,
    {
        Self::new(FnListener { handler })
    }

    /// Wrap an already shared listener, keeping the caller's `Arc` usable
    pub fn from_arc(listener: Arc<dyn Listener>) -> Self {
        Self { inner: listener }
    }

    /// Check whether two handles point at the same registered listener
    pub fn ptr_eq(a: &Self, b: &Self) -> bool {
        a.addr() == b.addr()
    }

    pub(crate) fn invoke(
        &self,
        event: &mut Event,
        event_name: &str,
        dispatcher: &Dispatcher,
    ) -> ListenerResult {
        self.inner.invoke(event, event_name, dispatcher)
    }

    // Data address only; vtable pointers are not unique per type.
    fn addr(&self) -> *const () {
        Arc::as_ptr(&self.inner) as *const ()
    }
}

impl PartialEq for ListenerRef {
    fn eq(&self, other: &Self) -> bool {
        Self::ptr_eq(self, other)
    }
}

impl Eq for ListenerRef {}

impl fmt::Debug for ListenerRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ListenerRef").field(&self.addr()).finish()
    }
}
