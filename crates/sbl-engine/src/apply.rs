use sbl_types::{Ledger, Operation, ShareMap};

/// Fold a batch of operations into a ledger snapshot, producing a new one.
///
/// Operations apply strictly in the given order onto a copy seeded from
/// `current`, so a later operation in the same batch wins for the same item.
/// The input ledger is never touched, which lets callers diff old against new
/// state.
///
/// This function is total. Item ids are not validated against any receipt (a
/// stale or hallucinated id from the command interpreter is recorded as-is
/// rather than failing the batch), and an assign with no people is ignored.
pub fn apply(current: &Ledger, operations: &[Operation]) -> Ledger {
    let mut next = current.clone();
    for operation in operations {
        match operation {
            Operation::Assign { item_id, people } => {
                let shares = equal_shares(people);
                if shares.is_empty() {
                    tracing::debug!(item = %item_id, "ignoring assign with no people");
                    continue;
                }
                next.set_shares(item_id.clone(), shares);
            }
            Operation::Clear { item_id } => {
                next.clear_item(item_id);
            }
        }
    }
    next
}

/// Split ownership equally across the distinct people in `people`.
///
/// The list is treated as an ordered set: duplicates collapse onto their
/// first occurrence, and every remaining person receives exactly
/// `1 / distinct_count`, so the shares of an assigned item always sum to 1.
fn equal_shares(people: &[String]) -> ShareMap {
    let mut shares = ShareMap::new();
    for person in people {
        shares.entry(person.clone()).or_insert(0.0);
    }
    if !shares.is_empty() {
        let share = 1.0 / shares.len() as f64;
        for value in shares.values_mut() {
            *value = share;
        }
    }
    shares
}
