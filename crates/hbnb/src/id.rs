//! Typed identifiers for server-owned entities.
//!
//! Ids are minted by the API, the client only carries them around. Wrapping
//! them in a marker-typed struct keeps a place id from being passed where
//! another entity's id is expected.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A type-safe wrapper around string IDs.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Id<T> {
    value: String,
    _phantom: std::marker::PhantomData<T>,
}

// Serialize as just a string
impl<T> Serialize for Id<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.value.serialize(serializer)
    }
}

impl<'de, T> Deserialize<'de> for Id<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Ok(Self::from_string(value))
    }
}

impl<T> Id<T> {
    /// Creates an ID from a value handed out by the API.
    ///
    /// # Example
    /// ```
    /// use hbnb::id::PlaceId;
    ///
    /// let place_id = PlaceId::from_string("abc123".to_string());
    /// assert_eq!(place_id.as_str(), "abc123");
    /// ```
    pub fn from_string(value: String) -> Self {
        Self {
            value,
            _phantom: std::marker::PhantomData,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// The id as a single URL component: everything outside the RFC 3986
    /// unreserved set is percent-encoded, so an id never spills into another
    /// path segment or the query.
    pub fn url_encoded(&self) -> String {
        let mut encoded = String::with_capacity(self.value.len());
        for byte in self.value.bytes() {
            match byte {
                b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                    encoded.push(char::from(byte))
                }
                _ => encoded.push_str(&format!("%{byte:02X}")),
            }
        }
        encoded
    }
}

impl<T> fmt::Debug for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({})", self.value)
    }
}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl<T> From<String> for Id<T> {
    fn from(value: String) -> Self {
        Self::from_string(value)
    }
}

impl<T> From<&str> for Id<T> {
    fn from(value: &str) -> Self {
        Self::from_string(value.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PlaceMarker;

/// Type alias for Place IDs
pub type PlaceId = Id<PlaceMarker>;
