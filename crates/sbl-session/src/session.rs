use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use sbl_types::{Ledger, Operation, PersonSummary, Receipt, RecognizedReceipt};

use crate::id::SessionId;
use crate::transcript::TranscriptEntry;

/// In-memory state for one bill-splitting conversation.
///
/// A session owns the current receipt, the assignment ledger, and the
/// exchange transcript. All mutation is wholesale: a new receipt replaces the
/// old one and resets the ledger, and every operation batch swaps in a fresh
/// ledger snapshot produced by the engine. Nothing survives a process
/// restart.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BillSession {
    pub id: SessionId,
    pub created_at: DateTime<Utc>,
    pub receipt: Option<Receipt>,
    pub ledger: Ledger,
    pub transcript: Vec<TranscriptEntry>,
}

impl BillSession {
    /// Create an empty session with a fresh id.
    pub fn new() -> Self {
        Self {
            id: SessionId::new(),
            created_at: Utc::now(),
            receipt: None,
            ledger: Ledger::new(),
            transcript: Vec::new(),
        }
    }

    /// Load a freshly recognized receipt.
    ///
    /// The prior receipt (if any) is replaced wholesale and the ledger is
    /// reset to empty. This is the one cleanup path for assignments that
    /// referenced stale item ids.
    pub fn load_receipt(&mut self, raw: &RecognizedReceipt) -> &Receipt {
        let receipt = sbl_engine::normalize(raw);
        tracing::debug!(session = %self.id, items = receipt.items.len(), "receipt loaded");
        self.ledger = Ledger::new();
        self.receipt.insert(receipt)
    }

    /// Fold a batch of operations into the ledger.
    ///
    /// The engine returns a brand-new snapshot; the session swaps it in as
    /// the current ledger and returns a reference to it.
    pub fn apply_operations(&mut self, operations: &[Operation]) -> &Ledger {
        self.ledger = sbl_engine::apply(&self.ledger, operations);
        &self.ledger
    }

    /// Current per-person summaries; empty until a receipt is loaded.
    pub fn summaries(&self) -> Vec<PersonSummary> {
        match &self.receipt {
            Some(receipt) => sbl_engine::summarize(receipt, &self.ledger),
            None => Vec::new(),
        }
    }

    /// Record one command/reply exchange in the transcript.
    pub fn record_exchange(&mut self, command: Option<&str>, reply: &str) {
        if let Some(text) = command {
            self.transcript.push(TranscriptEntry::user(text));
        }
        if !reply.is_empty() {
            self.transcript.push(TranscriptEntry::assistant(reply));
        }
    }
}

impl Default for BillSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use sbl_types::{ItemId, RecognizedItem};

    use super::*;

    fn recognized() -> RecognizedReceipt {
        RecognizedReceipt {
            items: vec![
                RecognizedItem {
                    name: "Burger".into(),
                    price: 10.0,
                },
                RecognizedItem {
                    name: "Fries".into(),
                    price: 4.0,
                },
            ],
            subtotal: Some(14.0),
            tax: Some(1.4),
            tip: Some(2.0),
            total: Some(17.4),
        }
    }

    #[test]
    fn new_session_is_empty() {
        let session = BillSession::new();
        assert!(session.receipt.is_none());
        assert!(session.ledger.is_empty());
        assert!(session.transcript.is_empty());
        assert!(session.summaries().is_empty());
    }

    #[test]
    fn load_receipt_normalizes_and_returns_it() {
        let mut session = BillSession::new();
        let receipt = session.load_receipt(&recognized());
        assert_eq!(receipt.items.len(), 2);
        assert_eq!(receipt.items[0].id, ItemId::from_index(0));
        assert_eq!(receipt.subtotal, 14.0);
    }

    #[test]
    fn reload_resets_the_ledger() {
        let mut session = BillSession::new();
        session.load_receipt(&recognized());
        session.apply_operations(&[Operation::assign("item-0", &["Tom"])]);
        assert!(!session.ledger.is_empty());

        session.load_receipt(&recognized());
        assert!(session.ledger.is_empty());
        assert!(session.summaries().is_empty());
    }

    #[test]
    fn reload_discards_stale_assignments() {
        let mut session = BillSession::new();
        session.load_receipt(&recognized());
        // The id never existed on the receipt, but the ledger records it.
        session.apply_operations(&[Operation::assign("item-42", &["Ghost"])]);
        assert!(session.ledger.is_assigned(&ItemId::new("item-42")));

        session.load_receipt(&recognized());
        assert!(!session.ledger.is_assigned(&ItemId::new("item-42")));
    }

    #[test]
    fn apply_operations_updates_summaries() {
        let mut session = BillSession::new();
        session.load_receipt(&recognized());
        session.apply_operations(&[
            Operation::assign("item-0", &["Tom"]),
            Operation::assign("item-1", &["Tom", "Sam"]),
        ]);

        let summaries = session.summaries();
        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].name, "Tom");
        assert!((summaries[0].items_total - 12.0).abs() < 1e-9);
    }

    #[test]
    fn operations_without_receipt_still_apply() {
        let mut session = BillSession::new();
        session.apply_operations(&[Operation::assign("item-0", &["Ana"])]);
        assert!(session.ledger.is_assigned(&ItemId::from_index(0)));
        // Without a receipt there is nothing to allocate against.
        assert!(session.summaries().is_empty());
    }

    #[test]
    fn record_exchange_appends_both_speakers() {
        let mut session = BillSession::new();
        session.record_exchange(Some("Tom had the burger"), "Assigned the burger to Tom.");
        assert_eq!(session.transcript.len(), 2);
        assert_eq!(session.transcript[0].text, "Tom had the burger");
        assert_eq!(session.transcript[1].text, "Assigned the burger to Tom.");
    }

    #[test]
    fn record_exchange_skips_absent_parts() {
        let mut session = BillSession::new();
        session.record_exchange(None, "Reply only.");
        session.record_exchange(Some("command only"), "");
        assert_eq!(session.transcript.len(), 2);
    }
}
