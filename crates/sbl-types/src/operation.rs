use serde::{Deserialize, Serialize};

use crate::item::ItemId;

/// A single unit of ledger mutation.
///
/// Operations arrive in batches, usually decoded from command-interpreter
/// output, and fold into the ledger strictly in order. `Assign` replaces the
/// item's entire ownership set; `Clear` removes it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Operation {
    /// Replace the item's share map with an equal split among `people`.
    ///
    /// An empty people list makes the operation a no-op when applied.
    Assign { item_id: ItemId, people: Vec<String> },
    /// Remove the item's entry entirely, regardless of prior state.
    Clear { item_id: ItemId },
}

impl Operation {
    /// Convenience constructor for an assign operation.
    pub fn assign(item_id: impl Into<ItemId>, people: &[&str]) -> Self {
        Self::Assign {
            item_id: item_id.into(),
            people: people.iter().map(|person| person.to_string()).collect(),
        }
    }

    /// Convenience constructor for a clear operation.
    pub fn clear(item_id: impl Into<ItemId>) -> Self {
        Self::Clear {
            item_id: item_id.into(),
        }
    }

    /// The item this operation targets.
    pub fn item_id(&self) -> &ItemId {
        match self {
            Self::Assign { item_id, .. } | Self::Clear { item_id } => item_id,
        }
    }
}
