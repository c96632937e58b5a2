use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use sbl_protocol::ErrorBody;
use sbl_session::SessionError;

/// Errors surfaced by the HTTP layer.
///
/// The engine itself is total; everything here is glue-level: unknown
/// sessions, malformed session ids, capacity limits, and I/O.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error(transparent)]
    Session(#[from] SessionError),

    #[error("invalid session id: {0}")]
    InvalidSessionId(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("internal error: {0}")]
    Internal(String),
}

impl ServerError {
    fn status(&self) -> StatusCode {
        match self {
            Self::Session(SessionError::NotFound(_)) => StatusCode::NOT_FOUND,
            Self::Session(SessionError::AtCapacity(_)) => StatusCode::TOO_MANY_REQUESTS,
            Self::InvalidSessionId(_) => StatusCode::BAD_REQUEST,
            Self::Session(SessionError::LockPoisoned) | Self::Io(_) | Self::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorBody {
            message: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

pub type ServerResult<T> = Result<T, ServerError>;
