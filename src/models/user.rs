use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::validation::validate_non_negative_amount;

/// User entity representing a registered user in the system
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, sqlx::FromRow)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    /// Total monthly budget this user wants to stay within
    pub monthly_budget: Decimal,
    pub created_at: DateTime<Utc>,
}

/// Request payload for user registration
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[schema(example = json!({
    "name": "John Doe",
    "email": "john.doe@example.com",
    "monthly_budget": 3000.0
}))]
pub struct CreateUserRequest {
    #[validate(length(
        min = 1,
        max = 100,
        message = "Name must be between 1 and 100 characters"
    ))]
    pub name: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    /// Defaults to 0 when omitted
    #[validate(custom(function = "validate_non_negative_amount"))]
    #[schema(value_type = f64, minimum = 0.0, example = 3000.0)]
    pub monthly_budget: Option<Decimal>,
}

/// Request payload for partially updating a user
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[schema(example = json!({
    "monthly_budget": 3500.0
}))]
pub struct UpdateUserRequest {
    #[validate(length(
        min = 1,
        max = 100,
        message = "Name must be between 1 and 100 characters"
    ))]
    pub name: Option<String>,

    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,

    #[validate(custom(function = "validate_non_negative_amount"))]
    #[schema(value_type = f64, minimum = 0.0)]
    pub monthly_budget: Option<Decimal>,
}

impl UpdateUserRequest {
    /// True when no field is set; such an update is rejected at the handler
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.monthly_budget.is_none()
    }
}
