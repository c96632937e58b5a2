use serde::{Deserialize, Serialize};

/// Derived per-person owed amounts for one receipt + ledger state.
///
/// Summaries are recomputed on every query and never stored. `items_total`
/// is the person's share-weighted item cost; `tax_share` and `tip_share` are
/// prorated from the receipt's stated subtotal (see the allocation
/// calculator in `sbl-engine`); `total` is the sum of the three.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PersonSummary {
    pub name: String,
    pub items_total: f64,
    pub tax_share: f64,
    pub tip_share: f64,
    pub total: f64,
}
