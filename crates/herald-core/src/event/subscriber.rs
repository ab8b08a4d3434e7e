use crate::event::dispatcher::Dispatcher;

/// Registers and unregisters a related batch of listeners in one call.
///
/// The dispatcher keeps no record of subscribers. An implementation must hold
/// on to the [`ListenerRef`](crate::event::ListenerRef)s it registered so that
/// `unsubscribe` can remove exactly those, leaving the dispatcher as it was
/// before `subscribe`.
pub trait Subscriber {
    /// Register this subscriber's listeners
    fn subscribe(&self, dispatcher: &Dispatcher);

    /// Remove every listener `subscribe` registered
    fn unsubscribe(&self, dispatcher: &Dispatcher);
}
