use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable identifier for a receipt line item.
///
/// Ids are fabricated during receipt normalization as `item-<index>` from the
/// item's zero-based position in the recognizer output. Within a session they
/// are never reused or renumbered; a fresh receipt upload starts a fresh
/// sequence.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    /// Create an id from an arbitrary string (e.g. one received on the wire).
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Fabricate the canonical id for the item at `index`.
    pub fn from_index(index: usize) -> Self {
        Self(format!("item-{index}"))
    }

    /// The raw string form.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ItemId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ItemId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// A single receipt line item.
///
/// Items are created once during receipt normalization and are immutable
/// thereafter. Prices are expected to be non-negative but are not validated;
/// the recognizer's figures are taken at face value.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub price: f64,
}
