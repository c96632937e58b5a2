//! Wire contracts for the Shared Bill Ledger.
//!
//! Defines the JSON shapes exchanged with the two external collaborators —
//! the receipt recognizer and the command interpreter — plus the
//! request/response bodies served by `sbl-server`. Operation decoding is
//! deliberately lenient: a malformed entry is dropped, never an error, so one
//! bad operation can never poison the rest of a batch (see
//! [`InterpreterOutput::decode_operations`]).

pub mod endpoint;
pub mod message;

pub use endpoint::{endpoints, HealthResponse};
pub use message::{
    CommandApplied, ErrorBody, InterpreterOutput, ReceiptLoaded, SessionCreated, SessionSnapshot,
    SummaryBody, WireAction, WireOperation, PROTOCOL_VERSION,
};
