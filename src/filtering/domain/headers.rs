//! Message header metadata carried alongside the payload.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Header metadata attached to a message.
///
/// Headers are free-form string keys mapped to JSON values. The filtering
/// layer never interprets them itself; hint resolvers and downstream
/// endpoints may.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use wren::filtering::domain::MessageHeaders;
///
/// let mut headers = MessageHeaders::empty();
/// headers.insert("priority", json!("express"));
/// assert_eq!(headers.get("priority"), Some(&json!("express")));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageHeaders(HashMap<String, Value>);

impl MessageHeaders {
    /// Creates an empty header map.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns the value for a header, if present.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Returns the value for a header as a string slice, if present and
    /// string-valued.
    #[must_use]
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    /// Inserts a header, replacing any existing value for the key.
    pub fn insert(&mut self, key: impl Into<String>, value: Value) {
        self.0.insert(key.into(), value);
    }

    /// Returns `true` if a header with the given key exists.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Returns the number of headers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if no headers are present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over header key/value pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }
}

impl FromIterator<(String, Value)> for MessageHeaders {
    fn from_iter<T: IntoIterator<Item = (String, Value)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}
