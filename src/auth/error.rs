use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use tracing::{error, warn};

use crate::auth::repo::StoreError;

/// Faults a registration attempt can end in.
#[derive(Debug, Error)]
pub enum RegisterError {
    /// The email is already taken; no record was created or modified.
    #[error("email already registered")]
    Duplicate,
    /// A required field is missing or empty.
    #[error("{0}")]
    Validation(&'static str),
    /// Hashing or persistence failed; details stay server-side.
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl From<StoreError> for RegisterError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::DuplicateEmail => RegisterError::Duplicate,
            StoreError::Other(e) => RegisterError::Internal(e),
        }
    }
}

/// JSON body of every non-success response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub msg: String,
}

impl IntoResponse for RegisterError {
    fn into_response(self) -> Response {
        let (status, msg) = match self {
            RegisterError::Duplicate => {
                warn!("registration rejected: email already registered");
                (StatusCode::CONFLICT, "email already registered".to_string())
            }
            RegisterError::Validation(msg) => {
                warn!(%msg, "registration rejected: invalid request");
                (StatusCode::BAD_REQUEST, msg.to_string())
            }
            RegisterError::Internal(e) => {
                // Logged here, never echoed to the client.
                error!(error = %e, "registration failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "server error".to_string())
            }
        };

        (status, Json(ErrorBody { msg })).into_response()
    }
}
