use axum::extract::FromRef;
use std::sync::Arc;

use crate::services::analysis_service::AnalysisService;
use crate::services::category_service::CategoryService;
use crate::services::expense_service::ExpenseService;
use crate::services::income_service::IncomeService;
use crate::services::recommendation_service::RecommendationService;
use crate::services::user_service::UserService;

/// Shared application state: one service handle per concern, cloned into
/// handlers through `FromRef`
#[derive(Clone, FromRef)]
pub struct AppState {
    pub user_service: Arc<dyn UserService>,
    pub category_service: Arc<dyn CategoryService>,
    pub income_service: Arc<dyn IncomeService>,
    pub expense_service: Arc<dyn ExpenseService>,
    pub analysis_service: Arc<dyn AnalysisService>,
    pub recommendation_service: Arc<dyn RecommendationService>,
}
