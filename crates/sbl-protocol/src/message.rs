use serde::{Deserialize, Serialize};
use serde_json::Value;

use sbl_types::{ItemId, Ledger, Operation, PersonSummary, Receipt};

pub const PROTOCOL_VERSION: u32 = 1;

/// Command-interpreter output relayed to the core.
///
/// The interpreter receives `(commandText, receiptItems, currentLedger)` and
/// returns primitive operations plus a human-readable reply. Operations
/// arrive here as raw JSON values and are decoded one by one, so a single
/// malformed entry cannot poison the batch.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct InterpreterOutput {
    #[serde(default)]
    pub operations: Vec<Value>,
    #[serde(default)]
    pub reply: String,
    /// The original free-text command, when the caller relays it. Used only
    /// for the session transcript.
    #[serde(default)]
    pub command: Option<String>,
}

impl InterpreterOutput {
    /// Decode the raw operation values, dropping whatever does not conform.
    ///
    /// Never fails: an unrecognized action, a missing item id, or an entry
    /// that is not an operation object at all is logged at debug level and
    /// skipped, and the remainder of the batch still applies.
    pub fn decode_operations(&self) -> Vec<Operation> {
        self.operations
            .iter()
            .filter_map(|value| match serde_json::from_value::<WireOperation>(value.clone()) {
                Ok(wire) => {
                    let operation = wire.into_operation();
                    if operation.is_none() {
                        tracing::debug!(%value, "dropping non-conforming operation");
                    }
                    operation
                }
                Err(error) => {
                    tracing::debug!(%error, "dropping undecodable operation");
                    None
                }
            })
            .collect()
    }
}

/// Action discriminator on the interpreter wire.
///
/// Anything other than `"assign"` or `"clear"` decodes as `Unknown`, and the
/// carrying operation is dropped.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WireAction {
    Assign,
    Clear,
    #[default]
    Unknown,
}

impl<'de> Deserialize<'de> for WireAction {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(match raw.as_str() {
            "assign" => Self::Assign,
            "clear" => Self::Clear,
            _ => Self::Unknown,
        })
    }
}

/// One operation exactly as the interpreter emits it. The camelCase field
/// names are the external contract.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireOperation {
    #[serde(default)]
    pub action: WireAction,
    #[serde(default)]
    pub item_id: Option<String>,
    #[serde(default)]
    pub people: Vec<String>,
}

impl WireOperation {
    /// Convert to a core operation, or `None` when the action is unknown or
    /// the item id is missing or empty.
    pub fn into_operation(self) -> Option<Operation> {
        let item_id = match self.item_id {
            Some(id) if !id.is_empty() => ItemId::new(id),
            _ => return None,
        };
        match self.action {
            WireAction::Assign => Some(Operation::Assign {
                item_id,
                people: self.people,
            }),
            WireAction::Clear => Some(Operation::Clear { item_id }),
            WireAction::Unknown => None,
        }
    }
}

/// Body returned when a session is created.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SessionCreated {
    pub session_id: String,
    pub protocol_version: u32,
}

/// Body returned after a receipt upload.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ReceiptLoaded {
    pub receipt: Receipt,
}

/// Body returned after a command batch is applied.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CommandApplied {
    pub reply: String,
    pub applied_operations: usize,
    pub summaries: Vec<PersonSummary>,
}

/// Full session view: receipt, ledger, and derived summaries.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub session_id: String,
    pub receipt: Option<Receipt>,
    pub ledger: Ledger,
    pub summaries: Vec<PersonSummary>,
}

/// Body returned from the summary endpoint.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SummaryBody {
    pub summaries: Vec<PersonSummary>,
}

/// JSON error body for failed requests.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub message: String,
}
