use axum::{
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};

use crate::handlers::analysis_handlers::{get_analysis_handler, get_recommendations_handler};
use crate::handlers::category_handlers::list_categories_handler;
use crate::handlers::expense_handlers::{
    add_expense_handler, delete_expense_handler, list_expenses_handler,
};
use crate::handlers::income_handlers::{add_income_handler, list_income_handler};
use crate::handlers::user_handlers::{create_user_handler, get_user_handler, update_user_handler};
use crate::state::AppState;

/// Liveness endpoint
async fn health_check() -> Json<Value> {
    Json(json!({ "status": "healthy" }))
}

/// Build the API router; shared between the server binary and the
/// integration tests
pub fn api_router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health_check))
        .route("/api/categories", get(list_categories_handler))
        .route("/api/users", post(create_user_handler))
        .route(
            "/api/users/:user_id",
            get(get_user_handler).put(update_user_handler),
        )
        .route("/api/income", post(add_income_handler))
        .route("/api/income/:user_id", get(list_income_handler))
        .route("/api/expenses", post(add_expense_handler))
        // GET takes a user ID, DELETE an expense ID; one route entry since
        // the paths overlap
        .route(
            "/api/expenses/:id",
            get(list_expenses_handler).delete(delete_expense_handler),
        )
        .route("/api/analysis/:user_id", get(get_analysis_handler))
        .route(
            "/api/recommendations/:user_id",
            get(get_recommendations_handler),
        )
        .with_state(state)
}
