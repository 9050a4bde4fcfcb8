use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

use super::{validation_error_response, ErrorResponse};
use crate::models::user::{CreateUserRequest, UpdateUserRequest, User};
use crate::services::user_service::{UserError, UserService};

/// Convert UserError to HTTP response
impl IntoResponse for UserError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match self {
            UserError::EmailTaken => (
                StatusCode::CONFLICT,
                "email_taken",
                "A user with this email is already registered".to_string(),
            ),
            UserError::UserNotFound => (
                StatusCode::NOT_FOUND,
                "user_not_found",
                "User not found".to_string(),
            ),
            UserError::DatabaseError(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "database_error", msg)
            }
        };

        let error_response = ErrorResponse::new(error_type, &message);
        (status, Json(error_response)).into_response()
    }
}

/// Handler for user registration
///
/// Creates a new user account with an optional monthly budget.
#[utoipa::path(
    post,
    path = "/api/users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User successfully created", body = User),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 409, description = "Email already registered", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "users"
)]
pub async fn create_user_handler(
    State(user_service): State<Arc<dyn UserService>>,
    Json(request): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<User>), Response> {
    if let Err(validation_errors) = request.validate() {
        return Err(validation_error_response(validation_errors));
    }

    match user_service.register(request).await {
        Ok(user) => Ok((StatusCode::CREATED, Json(user))),
        Err(e) => Err(e.into_response()),
    }
}

/// Handler for fetching a single user
#[utoipa::path(
    get,
    path = "/api/users/{user_id}",
    params(
        ("user_id" = Uuid, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "The requested user", body = User),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "users"
)]
pub async fn get_user_handler(
    State(user_service): State<Arc<dyn UserService>>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<User>, Response> {
    match user_service.get_user(user_id).await {
        Ok(user) => Ok(Json(user)),
        Err(e) => Err(e.into_response()),
    }
}

/// Handler for partially updating a user
///
/// Only the fields present in the payload are changed.
#[utoipa::path(
    put,
    path = "/api/users/{user_id}",
    params(
        ("user_id" = Uuid, Path, description = "User ID")
    ),
    request_body = UpdateUserRequest,
    responses(
        (status = 204, description = "User successfully updated"),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "users"
)]
pub async fn update_user_handler(
    State(user_service): State<Arc<dyn UserService>>,
    Path(user_id): Path<Uuid>,
    Json(request): Json<UpdateUserRequest>,
) -> Result<StatusCode, Response> {
    if let Err(validation_errors) = request.validate() {
        return Err(validation_error_response(validation_errors));
    }
    if request.is_empty() {
        let error_response = ErrorResponse::new("empty_update", "No fields to update");
        return Err((StatusCode::BAD_REQUEST, Json(error_response)).into_response());
    }

    match user_service.update_user(user_id, request).await {
        Ok(()) => Ok(StatusCode::NO_CONTENT),
        Err(e) => Err(e.into_response()),
    }
}
