use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

use super::{validation_error_response, ErrorResponse, PeriodQuery};
use crate::models::income::{CreateIncomeRequest, Income};
use crate::services::income_service::{IncomeError, IncomeService};

/// Convert IncomeError to HTTP response
impl IntoResponse for IncomeError {
    fn into_response(self) -> Response {
        let IncomeError::DatabaseError(msg) = self;
        let error_response = ErrorResponse::new("database_error", &msg);
        (StatusCode::INTERNAL_SERVER_ERROR, Json(error_response)).into_response()
    }
}

/// Handler for recording income
///
/// The record's month and year are derived from its date.
#[utoipa::path(
    post,
    path = "/api/income",
    request_body = CreateIncomeRequest,
    responses(
        (status = 201, description = "Income successfully recorded", body = Income),
        (status = 400, description = "Validation error (non-positive amount)", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "income"
)]
pub async fn add_income_handler(
    State(income_service): State<Arc<dyn IncomeService>>,
    Json(request): Json<CreateIncomeRequest>,
) -> Result<(StatusCode, Json<Income>), Response> {
    if let Err(validation_errors) = request.validate() {
        return Err(validation_error_response(validation_errors));
    }

    match income_service.add_income(request).await {
        Ok(income) => Ok((StatusCode::CREATED, Json(income))),
        Err(e) => Err(e.into_response()),
    }
}

/// Handler for listing a user's income
///
/// The period filter applies only when both month and year are supplied.
#[utoipa::path(
    get,
    path = "/api/income/{user_id}",
    params(
        ("user_id" = Uuid, Path, description = "User ID"),
        PeriodQuery
    ),
    responses(
        (status = 200, description = "Income records, newest first", body = Vec<Income>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "income"
)]
pub async fn list_income_handler(
    State(income_service): State<Arc<dyn IncomeService>>,
    Path(user_id): Path<Uuid>,
    Query(period): Query<PeriodQuery>,
) -> Result<Json<Vec<Income>>, Response> {
    match income_service.list_income(user_id, period.as_filter()).await {
        Ok(income) => Ok(Json(income)),
        Err(e) => Err(e.into_response()),
    }
}
