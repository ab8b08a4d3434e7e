use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::event::error::EventSystemError;

/// Key-value bag carried by an [`Event`]
pub type EventData = HashMap<String, Value>;

/// The value handed to every listener during a broadcast.
///
/// The name is fixed at construction. The data bag is mutable and shared by
/// every listener of one broadcast, so a value added by one listener is seen
/// by the listeners after it and by whoever started the broadcast. Once
/// stopped, an event stays stopped.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    name: String,
    data: EventData,
    stopped: bool,
}

impl Event {
    /// Create an event with an empty data bag
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_data(name, EventData::new())
    }

    /// Create an event carrying the given data
    pub fn with_data(name: impl Into<String>, data: EventData) -> Self {
        Self {
            name: name.into(),
            data,
            stopped: false,
        }
    }

    /// Get the name of this event
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The whole data bag
    pub fn data(&self) -> &EventData {
        &self.data
    }

    /// Mutable access to the whole data bag
    pub fn data_mut(&mut self) -> &mut EventData {
        &mut self.data
    }

    /// Look up a single value, failing if the key was never added
    pub fn get_data(&self, key: &str) -> Result<&Value, EventSystemError> {
        self.data
            .get(key)
            .ok_or_else(|| EventSystemError::MissingData {
                event_name: self.name.clone(),
                key: key.to_string(),
            })
    }

    /// Look up a value and deserialize it into `T`
    pub fn get_data_as<T: DeserializeOwned>(&self, key: &str) -> Result<T, EventSystemError> {
        let value = self.get_data(key)?;
        serde_json::from_value(value.clone()).map_err(|e| EventSystemError::InvalidEventData {
            event_name: self.name.clone(),
            key: key.to_string(),
            details: e.to_string(),
        })
    }

    /// Check if a key is present in the data bag
    pub fn has_data(&self, key: &str) -> bool {
        self.data.contains_key(key)
    }

    /// Insert a value, overwriting any previous value under the same key
    pub fn add_data(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.data.insert(key.into(), value.into());
    }

    /// Stop propagation to the listeners that have not run yet
    pub fn stop(&mut self) {
        self.stopped = true;
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped
    }
}
