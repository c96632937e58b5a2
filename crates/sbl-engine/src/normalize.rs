use sbl_types::{Item, ItemId, Receipt, RecognizedReceipt};

/// Convert raw recognizer output into a normalized receipt.
///
/// Items receive stable `item-<index>` ids from their zero-based position in
/// the recognizer output; ids are never renumbered afterwards. Missing money
/// fields default to zero. No consistency checks run between items, subtotal,
/// tax, tip, and total; the recognizer's stated figures are taken at face
/// value.
pub fn normalize(raw: &RecognizedReceipt) -> Receipt {
    let items = raw
        .items
        .iter()
        .enumerate()
        .map(|(index, raw_item)| Item {
            id: ItemId::from_index(index),
            name: raw_item.name.clone(),
            price: raw_item.price,
        })
        .collect();

    Receipt {
        items,
        subtotal: raw.subtotal.unwrap_or(0.0),
        tax: raw.tax.unwrap_or(0.0),
        tip: raw.tip.unwrap_or(0.0),
        total: raw.total.unwrap_or(0.0),
    }
}
