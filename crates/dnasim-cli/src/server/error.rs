//! HTTP error responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use tracing::error;

use dnasim_core::DnaSimError;

pub const NOT_FOUND_MESSAGE: &str = "Simulation not found";

/// Failure returned by an API handler.
#[derive(Debug)]
pub enum ApiError {
    /// 400 with a message and, for field validation, the offending field
    BadRequest {
        message: String,
        field: Option<String>,
    },
    /// 404 for an unknown preset id
    NotFound,
    /// 500; details are logged, not returned
    Internal(String),
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        ApiError::BadRequest {
            message: message.into(),
            field: None,
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    field: Option<String>,
}

impl From<DnaSimError> for ApiError {
    fn from(err: DnaSimError) -> Self {
        match err {
            DnaSimError::Validation { field, message } => ApiError::BadRequest {
                message,
                field: Some(field),
            },
            DnaSimError::InvalidInput(message) => ApiError::bad_request(message),
            DnaSimError::NotFound(_) => ApiError::NotFound,
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::BadRequest { message, field } => {
                (StatusCode::BAD_REQUEST, ErrorBody { message, field })
            }
            ApiError::NotFound => (
                StatusCode::NOT_FOUND,
                ErrorBody {
                    message: NOT_FOUND_MESSAGE.to_string(),
                    field: None,
                },
            ),
            ApiError::Internal(detail) => {
                error!(%detail, "request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorBody {
                        message: "Internal Server Error".to_string(),
                        field: None,
                    },
                )
            }
        };
        (status, Json(body)).into_response()
    }
}
