//! Assignment and allocation engine for the Shared Bill Ledger (SBL).
//!
//! This crate is the heart of SBL. It provides:
//! - Receipt normalization from raw recognizer output
//! - Deterministic batch application of assign/clear operations
//! - Proportional allocation of item cost, tax, and tip per person
//!
//! Every function here is a pure, total, snapshot-in/snapshot-out
//! transformation: inputs are never mutated, malformed input degrades to a
//! per-operation no-op instead of an error, and the same inputs always
//! produce identical output. Nothing suspends and nothing is stored — callers
//! own the snapshots.

pub mod allocate;
pub mod apply;
pub mod normalize;

pub use allocate::summarize;
pub use apply::apply;
pub use normalize::normalize;
