//! HTTP adapter mapping for store and request-body failures.
//!
//! Purpose: keep [`StoreError`] transport agnostic while turning it into the
//! JSON envelope clients see. Every store failure becomes HTTP 500 with the
//! driver's message echoed verbatim; there is no client/server distinction
//! beyond a body that is not JSON at all.

use actix_web::{HttpRequest, HttpResponse, ResponseError, error::JsonPayloadError, http::StatusCode, web};
use serde::{Deserialize, Serialize};
use tracing::{error, warn};
use utoipa::ToSchema;

use crate::domain::StoreError;

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, ApiError>;

/// Failures an HTTP handler can return.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The record store failed; always HTTP 500.
    #[error(transparent)]
    Store(#[from] StoreError),
    /// The request body could not be parsed as JSON; HTTP 400.
    #[error("invalid request body: {message}")]
    InvalidBody { message: String },
}

impl ApiError {
    /// Create an invalid body error with the given message.
    pub fn invalid_body(message: impl Into<String>) -> Self {
        Self::InvalidBody {
            message: message.into(),
        }
    }

    /// Render the wire envelope for this error.
    pub fn body(&self) -> ErrorBody {
        let (kind, message) = match self {
            Self::Store(store) => match store {
                StoreError::Connection { message } | StoreError::Query { message } => {
                    (store.kind(), message.clone())
                }
            },
            Self::InvalidBody { message } => ("invalid_body", message.clone()),
        };
        ErrorBody {
            error: ErrorDetail {
                kind: kind.to_owned(),
                message,
            },
        }
    }
}

/// Error envelope: `{"error": {"kind": ..., "message": ...}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    /// The failure as reported by the store or the body parser.
    pub error: ErrorDetail,
}

/// Failure detail nested inside [`ErrorBody`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorDetail {
    /// `connection`, `query` or `invalid_body`.
    #[schema(example = "query")]
    pub kind: String,
    /// Raw message from the store driver or JSON parser.
    #[schema(example = "relation \"users\" does not exist")]
    pub message: String,
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::InvalidBody { .. } => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            Self::Store(err) => error!(error = %err, "store error returned to client"),
            Self::InvalidBody { message } => warn!(reason = %message, "rejected request body"),
        }
        HttpResponse::build(self.status_code()).json(self.body())
    }
}

/// JSON extractor settings shared by every handler.
///
/// The `Content-Type` header is not required, and parse failures use the
/// [`ErrorBody`] envelope instead of Actix's plain-text default.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .content_type_required(false)
        .error_handler(json_error_handler)
}

fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    ApiError::invalid_body(err.to_string()).into()
}
