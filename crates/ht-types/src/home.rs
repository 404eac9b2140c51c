use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CodecError;

/// A property record stored in the world state under its `id`.
///
/// The `id` is assigned at creation and never changes for the lifetime of
/// the record. Every field is kept as text: in particular `value` is an
/// opaque monetary string, never parsed numerically. Records are immutable
/// values — a mutation such as an ownership transfer produces a new `Home`
/// that replaces the old one at the same key.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Home {
    /// Unique world-state key.
    pub id: String,
    /// Descriptive label.
    pub name: String,
    /// Free-form size/location descriptor.
    pub area: String,
    /// Current owner name.
    pub owner: String,
    /// Monetary value, kept as opaque text.
    pub value: String,
}

impl Home {
    /// Construct a record from its five fields.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        area: impl Into<String>,
        owner: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            area: area.into(),
            owner: owner.into(),
            value: value.into(),
        }
    }

    /// Return a copy of this record with `owner` replaced.
    ///
    /// All other fields (`id`, `name`, `area`, `value`) are carried over
    /// verbatim. This is the core of the ownership-transfer operation: the
    /// result fully replaces the previous value at the same key.
    pub fn with_owner(&self, new_owner: impl Into<String>) -> Self {
        Self {
            id: self.id.clone(),
            name: self.name.clone(),
            area: self.area.clone(),
            owner: new_owner.into(),
            value: self.value.clone(),
        }
    }

    /// Encode the record as its JSON world-state representation.
    pub fn to_json(&self) -> Result<String, CodecError> {
        serde_json::to_string(self).map_err(CodecError::Encode)
    }

    /// Decode a record from its JSON world-state representation.
    pub fn from_json(json: &str) -> Result<Self, CodecError> {
        serde_json::from_str(json).map_err(CodecError::Decode)
    }

    /// Decode a record from raw world-state bytes.
    pub fn from_state_bytes(bytes: &[u8]) -> Result<Self, CodecError> {
        let json = std::str::from_utf8(bytes)?;
        Self::from_json(json)
    }
}

impl fmt::Display for Home {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Home({}, {}, owner: {})", self.id, self.name, self.owner)
    }
}
