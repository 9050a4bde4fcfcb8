use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;

use super::ErrorResponse;
use crate::models::category::Category;
use crate::services::category_service::{CategoryError, CategoryService};

/// Convert CategoryError to HTTP response
impl IntoResponse for CategoryError {
    fn into_response(self) -> Response {
        let CategoryError::DatabaseError(msg) = self;
        let error_response = ErrorResponse::new("database_error", &msg);
        (StatusCode::INTERNAL_SERVER_ERROR, Json(error_response)).into_response()
    }
}

/// Handler for listing the category directory
#[utoipa::path(
    get,
    path = "/api/categories",
    responses(
        (status = 200, description = "All spending categories, ordered by name", body = Vec<Category>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "categories"
)]
pub async fn list_categories_handler(
    State(category_service): State<Arc<dyn CategoryService>>,
) -> Result<Json<Vec<Category>>, Response> {
    match category_service.list_categories().await {
        Ok(categories) => Ok(Json(categories)),
        Err(e) => Err(e.into_response()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::UuidV4Generator;
    use crate::models::category::DEFAULT_CATEGORIES;
    use crate::services::category_service::CategoryServiceImpl;
    use crate::services::test_support::InMemoryCategoryRepository;

    #[tokio::test]
    async fn lists_seeded_directory() {
        let service: Arc<dyn CategoryService> = Arc::new(CategoryServiceImpl::new(
            Arc::new(InMemoryCategoryRepository::new()),
            Arc::new(UuidV4Generator),
        ));
        service.seed_defaults().await.unwrap();

        let result = list_categories_handler(State(service)).await;

        let Json(categories) = result.unwrap();
        assert_eq!(categories.len(), DEFAULT_CATEGORIES.len());
    }

    #[tokio::test]
    async fn empty_directory_lists_empty() {
        let service: Arc<dyn CategoryService> = Arc::new(CategoryServiceImpl::new(
            Arc::new(InMemoryCategoryRepository::new()),
            Arc::new(UuidV4Generator),
        ));

        let result = list_categories_handler(State(service)).await;
        assert!(result.unwrap().0.is_empty());
    }
}
