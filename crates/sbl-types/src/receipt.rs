use serde::{Deserialize, Serialize};

use crate::item::{Item, ItemId};

/// A normalized receipt.
///
/// Item order is the receipt's printed order; it matters for display, never
/// for calculation. The four money fields are the receipt's own stated
/// figures — `subtotal` is expected (but not required) to approximate the sum
/// of item prices, and tax/tip proration trusts it as-is rather than
/// re-deriving it from the items.
///
/// A receipt is immutable once created; a new upload replaces it wholesale.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Receipt {
    pub items: Vec<Item>,
    pub subtotal: f64,
    pub tax: f64,
    pub tip: f64,
    pub total: f64,
}

impl Receipt {
    /// Look up an item by id.
    pub fn item(&self, id: &ItemId) -> Option<&Item> {
        self.items.iter().find(|item| &item.id == id)
    }

    /// Sum of item prices. Diagnostic only; proration always uses the stated
    /// `subtotal` field.
    pub fn item_price_sum(&self) -> f64 {
        self.items.iter().map(|item| item.price).sum()
    }
}

/// Raw recognizer output for a single line item.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RecognizedItem {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub price: f64,
}

/// Raw recognizer output for a whole receipt, before normalization.
///
/// Every field tolerates being absent or null. The normalizer fabricates item
/// ids and default-fills missing money fields to zero.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RecognizedReceipt {
    #[serde(default)]
    pub items: Vec<RecognizedItem>,
    #[serde(default)]
    pub subtotal: Option<f64>,
    #[serde(default)]
    pub tax: Option<f64>,
    #[serde(default)]
    pub tip: Option<f64>,
    #[serde(default)]
    pub total: Option<f64>,
}
