use indexmap::IndexMap;
use sbl_types::{Ledger, PersonSummary, Receipt};

/// Compute per-person owed amounts for a receipt under a ledger.
///
/// Item cost accumulates as `price * share` over the receipt's items in
/// receipt order. Tax and tip are then prorated by each person's share of the
/// receipt's stated subtotal, not by the share of currently-assigned value.
/// Unassigned item value is excluded from every numerator but still sits in
/// the denominator, so on a partially assigned receipt the summaries
/// intentionally fall short of the receipt total.
///
/// People holding no nonzero item value are omitted entirely; there are no
/// zero-total rows. The result is sorted by total descending; the sort is
/// stable, so equal totals keep their first-encountered order.
pub fn summarize(receipt: &Receipt, ledger: &Ledger) -> Vec<PersonSummary> {
    let mut item_totals: IndexMap<String, f64> = IndexMap::new();
    for item in &receipt.items {
        let Some(shares) = ledger.shares(&item.id) else {
            continue;
        };
        for (person, share) in shares {
            *item_totals.entry(person.clone()).or_insert(0.0) += item.price * share;
        }
    }

    // A zero subtotal falls back to 1 so the ratio stays defined; tax and tip
    // then scale with raw assigned dollars.
    let safe_subtotal = if receipt.subtotal != 0.0 {
        receipt.subtotal
    } else {
        1.0
    };

    let mut summaries: Vec<PersonSummary> = item_totals
        .into_iter()
        .filter(|(_, items_total)| *items_total != 0.0)
        .map(|(name, items_total)| {
            let ratio = items_total / safe_subtotal;
            let tax_share = receipt.tax * ratio;
            let tip_share = receipt.tip * ratio;
            PersonSummary {
                name,
                items_total,
                tax_share,
                tip_share,
                total: items_total + tax_share + tip_share,
            }
        })
        .collect();

    summaries.sort_by(|a, b| b.total.total_cmp(&a.total));
    summaries
}

#[cfg(test)]
mod tests {
    use sbl_types::{Item, ItemId, Operation};

    use super::*;
    use crate::apply;

    const TOLERANCE: f64 = 1e-9;

    fn burger_and_fries() -> Receipt {
        Receipt {
            items: vec![
                Item {
                    id: ItemId::from_index(0),
                    name: "Burger".into(),
                    price: 10.0,
                },
                Item {
                    id: ItemId::from_index(1),
                    name: "Fries".into(),
                    price: 4.0,
                },
            ],
            subtotal: 14.0,
            tax: 1.4,
            tip: 2.0,
            total: 17.4,
        }
    }

    #[test]
    fn burger_and_fries_scenario() {
        let receipt = burger_and_fries();
        let ledger = apply(
            &Ledger::new(),
            &[
                Operation::assign("item-0", &["Tom"]),
                Operation::assign("item-1", &["Tom", "Sam"]),
            ],
        );

        let summaries = summarize(&receipt, &ledger);
        assert_eq!(summaries.len(), 2);

        let tom = &summaries[0];
        assert_eq!(tom.name, "Tom");
        assert!((tom.items_total - 12.0).abs() < TOLERANCE);
        assert!((tom.tax_share - 1.2).abs() < TOLERANCE);
        assert!((tom.tip_share - 2.0 * 12.0 / 14.0).abs() < TOLERANCE);
        assert!((tom.total - 14.914_285_714_285_715).abs() < TOLERANCE);

        let sam = &summaries[1];
        assert_eq!(sam.name, "Sam");
        assert!((sam.items_total - 2.0).abs() < TOLERANCE);
        assert!((sam.tax_share - 0.2).abs() < TOLERANCE);
        assert!((sam.tip_share - 2.0 * 2.0 / 14.0).abs() < TOLERANCE);
        assert!((sam.total - 2.485_714_285_714_286).abs() < TOLERANCE);
    }

    #[test]
    fn empty_ledger_yields_no_summaries() {
        assert!(summarize(&burger_and_fries(), &Ledger::new()).is_empty());
    }

    #[test]
    fn person_accumulates_across_items() {
        let receipt = burger_and_fries();
        let ledger = apply(
            &Ledger::new(),
            &[
                Operation::assign("item-0", &["Ana", "Bo"]),
                Operation::assign("item-1", &["Ana"]),
            ],
        );

        let summaries = summarize(&receipt, &ledger);
        let ana = summaries.iter().find(|s| s.name == "Ana").unwrap();
        assert!((ana.items_total - 9.0).abs() < TOLERANCE);
    }

    #[test]
    fn zero_item_total_is_excluded() {
        let receipt = Receipt {
            items: vec![Item {
                id: ItemId::from_index(0),
                name: "Water".into(),
                price: 0.0,
            }],
            subtotal: 0.0,
            tax: 0.0,
            tip: 0.0,
            total: 0.0,
        };
        let ledger = apply(&Ledger::new(), &[Operation::assign("item-0", &["Ana"])]);

        assert!(summarize(&receipt, &ledger).is_empty());
    }

    #[test]
    fn zero_subtotal_guard_scales_by_raw_dollars() {
        let receipt = Receipt {
            items: vec![Item {
                id: ItemId::from_index(0),
                name: "Burger".into(),
                price: 10.0,
            }],
            subtotal: 0.0,
            tax: 1.0,
            tip: 3.0,
            total: 0.0,
        };
        let ledger = apply(&Ledger::new(), &[Operation::assign("item-0", &["Ana"])]);

        let summaries = summarize(&receipt, &ledger);
        let ana = &summaries[0];
        assert!((ana.tax_share - receipt.tax * ana.items_total).abs() < TOLERANCE);
        assert!((ana.tip_share - receipt.tip * ana.items_total).abs() < TOLERANCE);
    }

    #[test]
    fn sorted_by_total_descending() {
        let receipt = burger_and_fries();
        let ledger = apply(
            &Ledger::new(),
            &[
                Operation::assign("item-1", &["Small"]),
                Operation::assign("item-0", &["Big"]),
            ],
        );

        let names: Vec<_> = summarize(&receipt, &ledger)
            .into_iter()
            .map(|s| s.name)
            .collect();
        assert_eq!(names, vec!["Big", "Small"]);
    }

    #[test]
    fn equal_totals_keep_first_seen_order() {
        let receipt = Receipt {
            items: vec![
                Item {
                    id: ItemId::from_index(0),
                    name: "Tea".into(),
                    price: 5.0,
                },
                Item {
                    id: ItemId::from_index(1),
                    name: "Coffee".into(),
                    price: 5.0,
                },
            ],
            subtotal: 10.0,
            tax: 1.0,
            tip: 0.0,
            total: 11.0,
        };
        let ledger = apply(
            &Ledger::new(),
            &[
                Operation::assign("item-0", &["First"]),
                Operation::assign("item-1", &["Second"]),
            ],
        );

        let names: Vec<_> = summarize(&receipt, &ledger)
            .into_iter()
            .map(|s| s.name)
            .collect();
        assert_eq!(names, vec!["First", "Second"]);
    }

    #[test]
    fn unassigned_value_is_counted_for_nobody() {
        let receipt = burger_and_fries();
        // Only the fries are assigned; the burger's value stays uncounted,
        // and the grand total of summaries falls short of the receipt total.
        let ledger = apply(
            &Ledger::new(),
            &[Operation::assign("item-1", &["Ana", "Bo"])],
        );

        let summaries = summarize(&receipt, &ledger);
        let grand_total: f64 = summaries.iter().map(|s| s.total).sum();
        assert!(grand_total < receipt.total);

        let items_sum: f64 = summaries.iter().map(|s| s.items_total).sum();
        assert!((items_sum - 4.0).abs() < TOLERANCE);
    }

    #[test]
    fn stale_ledger_entries_do_not_appear() {
        let receipt = burger_and_fries();
        // item-7 is not on the receipt; its entry is retained in the ledger
        // but contributes nothing to any summary.
        let ledger = apply(
            &Ledger::new(),
            &[
                Operation::assign("item-7", &["Ghost"]),
                Operation::assign("item-0", &["Tom"]),
            ],
        );

        let summaries = summarize(&receipt, &ledger);
        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].name, "Tom");
    }

    #[test]
    fn fractional_shares_weight_item_cost() {
        let receipt = burger_and_fries();
        let ledger = apply(
            &Ledger::new(),
            &[Operation::assign("item-0", &["Ana", "Bo", "Cy", "Dee"])],
        );

        let summaries = summarize(&receipt, &ledger);
        assert_eq!(summaries.len(), 4);
        for summary in &summaries {
            assert!((summary.items_total - 2.5).abs() < TOLERANCE);
        }
    }
}
