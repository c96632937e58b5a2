use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde_json::json;

use sbl_protocol::{
    CommandApplied, HealthResponse, InterpreterOutput, ReceiptLoaded, SessionCreated,
    SessionSnapshot, SummaryBody, PROTOCOL_VERSION,
};
use sbl_session::{SessionId, SessionStore, TranscriptEntry};
use sbl_types::RecognizedReceipt;

use crate::error::{ServerError, ServerResult};
use crate::state::AppState;

/// Health check handler.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::default())
}

/// Info handler.
pub async fn info_handler() -> Json<serde_json::Value> {
    Json(json!({
        "name": "sbl-server",
        "version": env!("CARGO_PKG_VERSION"),
        "protocol_version": PROTOCOL_VERSION,
    }))
}

/// Create a fresh session.
pub async fn create_session_handler(
    State(state): State<AppState>,
) -> ServerResult<Json<SessionCreated>> {
    let session = state.store.create()?;
    tracing::info!(session = %session.id, "session created");
    Ok(Json(SessionCreated {
        session_id: session.id.to_string(),
        protocol_version: PROTOCOL_VERSION,
    }))
}

/// Full session view: receipt, ledger, and derived summaries.
pub async fn get_session_handler(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> ServerResult<Json<SessionSnapshot>> {
    let id = parse_session_id(&raw_id)?;
    let session = state.store.get(&id)?;
    let summaries = session.summaries();
    Ok(Json(SessionSnapshot {
        session_id: session.id.to_string(),
        receipt: session.receipt,
        ledger: session.ledger,
        summaries,
    }))
}

/// Drop a session.
pub async fn delete_session_handler(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> ServerResult<StatusCode> {
    let id = parse_session_id(&raw_id)?;
    state.store.remove(&id)?;
    tracing::info!(session = %id, "session removed");
    Ok(StatusCode::NO_CONTENT)
}

/// Load recognizer output into the session.
///
/// The receipt replaces any prior one wholesale, and the ledger resets.
pub async fn upload_receipt_handler(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    Json(raw): Json<RecognizedReceipt>,
) -> ServerResult<Json<ReceiptLoaded>> {
    let id = parse_session_id(&raw_id)?;
    let mut session = state.store.get(&id)?;
    let receipt = session.load_receipt(&raw).clone();
    state.store.put(session)?;
    tracing::info!(session = %id, items = receipt.items.len(), "receipt uploaded");
    Ok(Json(ReceiptLoaded { receipt }))
}

/// Apply interpreter output to the session.
///
/// Operations decode leniently (garbage entries drop, the rest apply), the
/// exchange lands in the transcript, and the response carries the reply plus
/// freshly computed summaries.
pub async fn command_handler(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    Json(output): Json<InterpreterOutput>,
) -> ServerResult<Json<CommandApplied>> {
    let id = parse_session_id(&raw_id)?;
    let operations = output.decode_operations();

    let mut session = state.store.get(&id)?;
    session.apply_operations(&operations);
    session.record_exchange(output.command.as_deref(), &output.reply);
    let summaries = session.summaries();
    state.store.put(session)?;

    tracing::info!(session = %id, applied = operations.len(), "command applied");
    Ok(Json(CommandApplied {
        reply: output.reply,
        applied_operations: operations.len(),
        summaries,
    }))
}

/// Recomputed per-person summaries.
pub async fn summary_handler(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> ServerResult<Json<SummaryBody>> {
    let id = parse_session_id(&raw_id)?;
    let session = state.store.get(&id)?;
    Ok(Json(SummaryBody {
        summaries: session.summaries(),
    }))
}

/// The session's in-memory exchange log.
pub async fn transcript_handler(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> ServerResult<Json<Vec<TranscriptEntry>>> {
    let id = parse_session_id(&raw_id)?;
    let session = state.store.get(&id)?;
    Ok(Json(session.transcript))
}

fn parse_session_id(raw: &str) -> ServerResult<SessionId> {
    raw.parse()
        .map_err(|_| ServerError::InvalidSessionId(raw.to_string()))
}
