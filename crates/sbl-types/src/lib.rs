//! Foundation types for the Shared Bill Ledger (SBL).
//!
//! This crate provides the data model shared by every other SBL crate: line
//! items, receipts, the assignment ledger, ledger operations, and derived
//! per-person summaries.
//!
//! # Key Types
//!
//! - [`ItemId`] — Stable position-derived identifier for a receipt line item
//! - [`Receipt`] — Normalized receipt: items plus stated subtotal/tax/tip/total
//! - [`RecognizedReceipt`] — Raw recognizer output, before normalization
//! - [`Ledger`] — Item → per-person share fractions (the assignments)
//! - [`Operation`] — An `assign` or `clear` ledger mutation
//! - [`PersonSummary`] — Derived per-person owed amounts

pub mod item;
pub mod ledger;
pub mod operation;
pub mod receipt;
pub mod summary;

pub use item::{Item, ItemId};
pub use ledger::{Ledger, ShareMap};
pub use operation::Operation;
pub use receipt::{Receipt, RecognizedItem, RecognizedReceipt};
pub use summary::PersonSummary;
