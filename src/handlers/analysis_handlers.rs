use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;
use uuid::Uuid;

use super::{ErrorResponse, PeriodQuery};
use crate::models::analysis::{SavingsRecommendation, SpendingAnalysis};
use crate::services::analysis_service::{AnalysisError, AnalysisService};
use crate::services::recommendation_service::{RecommendationError, RecommendationService};

/// Convert AnalysisError to HTTP response
impl IntoResponse for AnalysisError {
    fn into_response(self) -> Response {
        let AnalysisError::DatabaseError(msg) = self;
        let error_response = ErrorResponse::new("database_error", &msg);
        (StatusCode::INTERNAL_SERVER_ERROR, Json(error_response)).into_response()
    }
}

/// Convert RecommendationError to HTTP response
impl IntoResponse for RecommendationError {
    fn into_response(self) -> Response {
        let RecommendationError::DatabaseError(msg) = self;
        let error_response = ErrorResponse::new("database_error", &msg);
        (StatusCode::INTERNAL_SERVER_ERROR, Json(error_response)).into_response()
    }
}

/// Handler for the monthly spending analysis
///
/// Defaults to the current calendar month when the period is omitted.
#[utoipa::path(
    get,
    path = "/api/analysis/{user_id}",
    params(
        ("user_id" = Uuid, Path, description = "User ID"),
        PeriodQuery
    ),
    responses(
        (status = 200, description = "Monthly spending analysis", body = SpendingAnalysis),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "analysis"
)]
pub async fn get_analysis_handler(
    State(analysis_service): State<Arc<dyn AnalysisService>>,
    Path(user_id): Path<Uuid>,
    Query(period): Query<PeriodQuery>,
) -> Result<Json<SpendingAnalysis>, Response> {
    match analysis_service
        .analyze(user_id, period.month, period.year)
        .await
    {
        Ok(analysis) => Ok(Json(analysis)),
        Err(e) => Err(e.into_response()),
    }
}

/// Handler for savings recommendations
///
/// One recommendation per overspent category, most severe first. Defaults
/// to the current calendar month when the period is omitted.
#[utoipa::path(
    get,
    path = "/api/recommendations/{user_id}",
    params(
        ("user_id" = Uuid, Path, description = "User ID"),
        PeriodQuery
    ),
    responses(
        (status = 200, description = "Savings recommendations", body = Vec<SavingsRecommendation>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "analysis"
)]
pub async fn get_recommendations_handler(
    State(recommendation_service): State<Arc<dyn RecommendationService>>,
    Path(user_id): Path<Uuid>,
    Query(period): Query<PeriodQuery>,
) -> Result<Json<Vec<SavingsRecommendation>>, Response> {
    match recommendation_service
        .recommend(user_id, period.month, period.year)
        .await
    {
        Ok(recommendations) => Ok(Json(recommendations)),
        Err(e) => Err(e.into_response()),
    }
}
