pub mod analysis_service;
pub mod category_service;
pub mod expense_service;
pub mod income_service;
pub mod recommendation_service;
pub mod user_service;

#[cfg(test)]
pub(crate) mod test_support;

pub use analysis_service::{AnalysisService, AnalysisServiceImpl};
pub use category_service::{CategoryService, CategoryServiceImpl};
pub use expense_service::{ExpenseService, ExpenseServiceImpl};
pub use income_service::{IncomeService, IncomeServiceImpl};
pub use recommendation_service::{RecommendationService, RecommendationServiceImpl};
pub use user_service::{UserService, UserServiceImpl};
