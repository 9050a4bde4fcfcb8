use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::validation::validate_positive_amount;

/// Expense entity representing a single categorized spending record
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, sqlx::FromRow)]
pub struct Expense {
    pub id: Uuid,
    pub user_id: Uuid,
    pub amount: Decimal,
    pub description: String,
    /// Advisory reference into the category directory; not enforced by the
    /// store, and expenses with a dangling reference are dropped from
    /// category breakdowns
    pub category_id: Uuid,
    pub date: NaiveDate,
    /// Derived from `date` at creation time, never client-settable
    pub month: i32,
    pub year: i32,
}

/// Request payload for recording an expense
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[schema(example = json!({
    "user_id": "550e8400-e29b-41d4-a716-446655440000",
    "amount": 42.50,
    "description": "Weekly groceries",
    "category_id": "7c9e6679-7425-40de-944b-e07fc1f90ae7",
    "date": "2024-01-15"
}))]
pub struct CreateExpenseRequest {
    pub user_id: Uuid,

    #[validate(custom(function = "validate_positive_amount"))]
    #[schema(value_type = f64, minimum = 0.01, example = 42.50)]
    pub amount: Decimal,

    #[validate(length(min = 1, max = 500, message = "Description must not be empty"))]
    pub description: String,

    pub category_id: Uuid,

    #[schema(format = "date", example = "2024-01-15")]
    pub date: NaiveDate,
}
