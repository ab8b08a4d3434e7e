
#[cfg(test)]
mod tests {
    use crate::event::{Dispatcher, ListenerRef, DEFAULT_PRIORITY};

    #[test]
    fn test_default_priority_value() {
        assert_eq!(DEFAULT_PRIORITY, 0);
    }

    #[test]
    fn test_event_dispatch() {
        use std::sync::atomic::{AtomicBool, Ordering};
        use std::sync::Arc;

        let dispatcher = Dispatcher::new();
        let called = Arc::new(AtomicBool::new(false));
        let called_clone = called.clone();

        dispatcher.on(
            "test_event",
            ListenerRef::from_fn(move |_event, _name, _dispatcher| {
                called_clone.store(true, Ordering::SeqCst);
                Ok(())
            }),
        );

        dispatcher.broadcast("test_event").unwrap();

        assert!(called.load(Ordering::SeqCst), "Listener should have been called");
    }
}
