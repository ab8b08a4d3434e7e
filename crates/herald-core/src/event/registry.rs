use std::collections::{BTreeMap, HashMap};
use std::fmt;

use crate::event::listener::ListenerRef;
use crate::event::Priority;

/// Listeners of one event name, grouped by priority.
/// The `BTreeMap` keeps groups in ascending priority; each `Vec` keeps
/// registration order.
type PriorityGroups = BTreeMap<Priority, Vec<ListenerRef>>;

/// Store of event name -> priority -> listeners (Internal, wrapped by `Dispatcher`)
///
/// No group is ever empty and no event name ever maps to zero groups.
#[derive(Default)]
pub struct ListenerRegistry {
    listeners: HashMap<String, PriorityGroups>,
}

impl fmt::Debug for ListenerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let counts: BTreeMap<&str, usize> = self
            .listeners
            .iter()
            .map(|(name, groups)| (name.as_str(), groups.values().map(Vec::len).sum()))
            .collect();
        f.debug_struct("ListenerRegistry")
            .field("listener_counts", &counts)
            .finish()
    }
}

impl ListenerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a listener to the end of its (event name, priority) group
    pub fn add(&mut self, event_name: &str, listener: ListenerRef, priority: Priority) {
        self.listeners
            .entry(event_name.to_string())
            .or_default()
            .entry(priority)
            .or_default()
            .push(listener);
    }

    /// Remove every registration of `listener` under `event_name`.
    /// Returns how many registrations were dropped.
    pub fn remove(&mut self, event_name: &str, listener: &ListenerRef) -> usize {
        let Some(groups) = self.listeners.get_mut(event_name) else {
            return 0;
        };

        let mut removed = 0;
        groups.retain(|_, group| {
            let before = group.len();
            group.retain(|l| l != listener);
            removed += before - group.len();
            !group.is_empty()
        });

        if groups.is_empty() {
            self.listeners.remove(event_name);
        }
        removed
    }

    pub fn has_listeners(&self, event_name: &str) -> bool {
        self.listeners
            .get(event_name)
            .is_some_and(|groups| groups.values().any(|group| !group.is_empty()))
    }

    /// Lowest priority `listener` is registered at for `event_name`
    pub fn priority_of(&self, event_name: &str, listener: &ListenerRef) -> Option<Priority> {
        self.listeners.get(event_name).and_then(|groups| {
            groups
                .iter()
                .find(|(_, group)| group.contains(listener))
                .map(|(priority, _)| *priority)
        })
    }

    /// Groups for `event_name` in ascending priority, priorities stripped
    pub fn groups(&self, event_name: &str) -> Vec<Vec<ListenerRef>> {
        self.listeners
            .get(event_name)
            .map(|groups| groups.values().cloned().collect())
            .unwrap_or_default()
    }

    /// Same as [`groups`](Self::groups) for every registered event name
    pub fn all_groups(&self) -> HashMap<String, Vec<Vec<ListenerRef>>> {
        self.listeners
            .iter()
            .map(|(name, groups)| (name.clone(), groups.values().cloned().collect()))
            .collect()
    }

    /// Flattened invocation order for `event_name`: ascending priority, then
    /// registration order
    pub fn resolve(&self, event_name: &str) -> Vec<ListenerRef> {
        self.listeners
            .get(event_name)
            .map(|groups| groups.values().flatten().cloned().collect())
            .unwrap_or_default()
    }

    pub fn count(&self, event_name: &str) -> usize {
        self.listeners
            .get(event_name)
            .map_or(0, |groups| groups.values().map(Vec::len).sum())
    }

    pub fn event_names(&self) -> Vec<String> {
        self.listeners.keys().cloned().collect()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}
