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
use crate::models::expense::{CreateExpenseRequest, Expense};
use crate::services::expense_service::{ExpenseError, ExpenseService};

/// Convert ExpenseError to HTTP response
impl IntoResponse for ExpenseError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match self {
            ExpenseError::ExpenseNotFound => (
                StatusCode::NOT_FOUND,
                "expense_not_found",
                "Expense not found".to_string(),
            ),
            ExpenseError::DatabaseError(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "database_error", msg)
            }
        };

        let error_response = ErrorResponse::new(error_type, &message);
        (status, Json(error_response)).into_response()
    }
}

/// Handler for recording an expense
///
/// The record's month and year are derived from its date. The category
/// reference is advisory and not checked against the directory.
#[utoipa::path(
    post,
    path = "/api/expenses",
    request_body = CreateExpenseRequest,
    responses(
        (status = 201, description = "Expense successfully recorded", body = Expense),
        (status = 400, description = "Validation error (non-positive amount)", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "expenses"
)]
pub async fn add_expense_handler(
    State(expense_service): State<Arc<dyn ExpenseService>>,
    Json(request): Json<CreateExpenseRequest>,
) -> Result<(StatusCode, Json<Expense>), Response> {
    if let Err(validation_errors) = request.validate() {
        return Err(validation_error_response(validation_errors));
    }

    match expense_service.add_expense(request).await {
        Ok(expense) => Ok((StatusCode::CREATED, Json(expense))),
        Err(e) => Err(e.into_response()),
    }
}

/// Handler for listing a user's expenses
///
/// The period filter applies only when both month and year are supplied.
#[utoipa::path(
    get,
    path = "/api/expenses/{user_id}",
    params(
        ("user_id" = Uuid, Path, description = "User ID"),
        PeriodQuery
    ),
    responses(
        (status = 200, description = "Expense records, newest first", body = Vec<Expense>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "expenses"
)]
pub async fn list_expenses_handler(
    State(expense_service): State<Arc<dyn ExpenseService>>,
    Path(user_id): Path<Uuid>,
    Query(period): Query<PeriodQuery>,
) -> Result<Json<Vec<Expense>>, Response> {
    match expense_service
        .list_expenses(user_id, period.as_filter())
        .await
    {
        Ok(expenses) => Ok(Json(expenses)),
        Err(e) => Err(e.into_response()),
    }
}

/// Handler for deleting an expense
#[utoipa::path(
    delete,
    path = "/api/expenses/{expense_id}",
    params(
        ("expense_id" = Uuid, Path, description = "Expense ID")
    ),
    responses(
        (status = 204, description = "Expense successfully deleted"),
        (status = 404, description = "Expense not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "expenses"
)]
pub async fn delete_expense_handler(
    State(expense_service): State<Arc<dyn ExpenseService>>,
    Path(expense_id): Path<Uuid>,
) -> Result<StatusCode, Response> {
    match expense_service.delete_expense(expense_id).await {
        Ok(()) => Ok(StatusCode::NO_CONTENT),
        Err(e) => Err(e.into_response()),
    }
}
