pub mod analysis_handlers;
pub mod category_handlers;
pub mod expense_handlers;
pub mod income_handlers;
pub mod user_handlers;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::ValidationErrors;

/// Error response structure shared by all handlers
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(error: &str, message: &str) -> Self {
        Self {
            error: error.to_string(),
            message: message.to_string(),
        }
    }
}

/// Optional (month, year) period filter; both parts must be present for the
/// filter to apply
#[derive(Debug, Clone, Copy, Deserialize, IntoParams)]
pub struct PeriodQuery {
    /// Calendar month, 1-12
    pub month: Option<i32>,
    /// Calendar year
    pub year: Option<i32>,
}

impl PeriodQuery {
    /// The equality filter for list endpoints: Some only when both parts
    /// were supplied
    pub fn as_filter(&self) -> Option<(i32, i32)> {
        match (self.month, self.year) {
            (Some(m), Some(y)) => Some((m, y)),
            _ => None,
        }
    }
}

/// Flatten validator output into a single 400 response
pub(crate) fn validation_error_response(validation_errors: ValidationErrors) -> Response {
    let error_message = validation_errors
        .field_errors()
        .iter()
        .map(|(field, errors)| {
            let messages: Vec<String> = errors
                .iter()
                .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
                .collect();
            format!("{}: {}", field, messages.join(", "))
        })
        .collect::<Vec<_>>()
        .join("; ");

    let error_response = ErrorResponse::new("validation_error", &error_message);
    (StatusCode::BAD_REQUEST, Json(error_response)).into_response()
}
