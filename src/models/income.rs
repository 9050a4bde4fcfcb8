use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::validation::validate_positive_amount;

/// Income entity representing a single income record
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, sqlx::FromRow)]
pub struct Income {
    pub id: Uuid,
    pub user_id: Uuid,
    pub amount: Decimal,
    pub source: String,
    pub date: NaiveDate,
    /// Derived from `date` at creation time, never client-settable
    pub month: i32,
    pub year: i32,
}

/// Request payload for recording income
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[schema(example = json!({
    "user_id": "550e8400-e29b-41d4-a716-446655440000",
    "amount": 2500.0,
    "source": "Salary",
    "date": "2024-01-15"
}))]
pub struct CreateIncomeRequest {
    pub user_id: Uuid,

    #[validate(custom(function = "validate_positive_amount"))]
    #[schema(value_type = f64, minimum = 0.01, example = 2500.0)]
    pub amount: Decimal,

    #[validate(length(min = 1, max = 200, message = "Source must not be empty"))]
    pub source: String,

    #[schema(format = "date", example = "2024-01-15")]
    pub date: NaiveDate,
}
