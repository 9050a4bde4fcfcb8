use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::models::analysis::{OverspendingCategory, SavingsRecommendation};
use crate::services::analysis_service::{AnalysisError, AnalysisService};

/// Recommendation service errors
#[derive(Debug, thiserror::Error)]
pub enum RecommendationError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl From<AnalysisError> for RecommendationError {
    fn from(e: AnalysisError) -> Self {
        match e {
            AnalysisError::DatabaseError(msg) => RecommendationError::DatabaseError(msg),
        }
    }
}

/// Canned savings advice per category; anything else falls back to the
/// generic tip
fn savings_tips(category: &str) -> Vec<String> {
    let tips: &[&str] = match category {
        "Food & Dining" => &[
            "Cook more meals at home instead of ordering takeout",
            "Plan weekly meals and create shopping lists",
            "Use grocery store apps for discounts and coupons",
            "Buy generic brands instead of name brands",
        ],
        "Transportation" => &[
            "Use public transportation when possible",
            "Combine errands into single trips",
            "Consider carpooling or ridesharing",
            "Walk or bike for short distances",
        ],
        "Entertainment" => &[
            "Look for free community events and activities",
            "Use streaming services instead of cable TV",
            "Take advantage of happy hour specials",
            "Host gatherings at home instead of going out",
        ],
        "Shopping" => &[
            "Wait 24 hours before making non-essential purchases",
            "Compare prices across different stores",
            "Buy items during sales and clearance events",
            "Use cashback apps and reward programs",
        ],
        "Bills & Utilities" => &[
            "Review and negotiate your monthly subscriptions",
            "Switch to energy-efficient appliances",
            "Use programmable thermostats",
            "Bundle services for better rates",
        ],
        _ => &["Review your spending in this category"],
    };

    tips.iter().map(|t| t.to_string()).collect()
}

/// Map each overspend record to a recommendation, preserving the
/// detector's severity ordering
pub fn recommendations_for(overspending: &[OverspendingCategory]) -> Vec<SavingsRecommendation> {
    overspending
        .iter()
        .map(|record| SavingsRecommendation {
            category: record.category.clone(),
            current_spending: record.spent,
            recommended_budget: record.budget,
            potential_savings: record.overspent,
            tips: savings_tips(&record.category),
        })
        .collect()
}

/// Trait defining savings recommendation operations
#[async_trait]
pub trait RecommendationService: Send + Sync {
    /// One recommendation per overspent category for the period, ordered by
    /// overspend severity. A missing period defaults to the current month.
    async fn recommend(
        &self,
        user_id: Uuid,
        month: Option<i32>,
        year: Option<i32>,
    ) -> Result<Vec<SavingsRecommendation>, RecommendationError>;
}

/// Implementation of RecommendationService
pub struct RecommendationServiceImpl {
    analysis_service: Arc<dyn AnalysisService>,
}

impl RecommendationServiceImpl {
    pub fn new(analysis_service: Arc<dyn AnalysisService>) -> Self {
        Self { analysis_service }
    }
}

#[async_trait]
impl RecommendationService for RecommendationServiceImpl {
    async fn recommend(
        &self,
        user_id: Uuid,
        month: Option<i32>,
        year: Option<i32>,
    ) -> Result<Vec<SavingsRecommendation>, RecommendationError> {
        let overspending = self
            .analysis_service
            .overspending(user_id, month, year)
            .await?;
        Ok(recommendations_for(&overspending))
    }
}
