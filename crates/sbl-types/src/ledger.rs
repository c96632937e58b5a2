use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::item::ItemId;

/// Per-person share fractions for a single item.
///
/// Keys are free-text person names, case sensitive, exactly as supplied.
/// Every stored fraction lies in `(0, 1]`; a person holding no share is
/// absent rather than present at zero. Insertion order is preserved for
/// display and first-seen tie-breaking only — arithmetic never depends on it.
pub type ShareMap = IndexMap<String, f64>;

/// The assignment ledger: item id → per-person share fractions.
///
/// Shares for one item need not sum to 1. The remainder is implicitly
/// unassigned and is counted toward nobody: it is not redistributed, and it
/// is not charged to whoever uploaded the receipt. An absent entry (or an
/// entry with an empty share map) means the item is wholly unassigned.
///
/// A ledger snapshot handed out for reading is never mutated in place: all
/// updates flow through the operation applier, which clones the snapshot and
/// returns a new one. Equality is structural.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ledger {
    entries: IndexMap<ItemId, ShareMap>,
}

impl Ledger {
    /// Create an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Shares recorded for an item, if an entry exists.
    pub fn shares(&self, id: &ItemId) -> Option<&ShareMap> {
        self.entries.get(id)
    }

    /// `true` if at least one person holds a share of the item.
    pub fn is_assigned(&self, id: &ItemId) -> bool {
        self.entries.get(id).is_some_and(|shares| !shares.is_empty())
    }

    /// Fraction of the item already assigned (sum of its shares; 0 if none).
    pub fn assigned_fraction(&self, id: &ItemId) -> f64 {
        self.entries
            .get(id)
            .map(|shares| shares.values().sum())
            .unwrap_or(0.0)
    }

    /// Replace the full share map for an item. Whole-item replacement: any
    /// prior shares for the item are discarded, never merged.
    pub fn set_shares(&mut self, id: ItemId, shares: ShareMap) {
        self.entries.insert(id, shares);
    }

    /// Remove an item's entry entirely. Returns `true` if one existed.
    pub fn clear_item(&mut self, id: &ItemId) -> bool {
        self.entries.shift_remove(id).is_some()
    }

    /// Number of items with an entry.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` if no item has an entry.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&ItemId, &ShareMap)> {
        self.entries.iter()
    }
}
