use async_trait::async_trait;
use chrono::Datelike;
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

use crate::generator::Clock;
use crate::models::analysis::{MonthComparison, OverspendingCategory, SpendingAnalysis};
use crate::models::category::Category;
use crate::models::expense::Expense;
use crate::repositories::category_repository::CategoryRepository;
use crate::repositories::expense_repository::ExpenseRepository;
use crate::repositories::income_repository::IncomeRepository;
use crate::repositories::user_repository::UserRepository;
use crate::repositories::RepositoryError;

const HUNDRED: Decimal = Decimal::ONE_HUNDRED;

/// Analysis service errors
#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl From<RepositoryError> for AnalysisError {
    fn from(e: RepositoryError) -> Self {
        AnalysisError::DatabaseError(e.to_string())
    }
}

/// Trait defining spending analysis operations
#[async_trait]
pub trait AnalysisService: Send + Sync {
    /// Build the full monthly spending report for a user. A missing period
    /// defaults to the current calendar month, resolved once per request.
    async fn analyze(
        &self,
        user_id: Uuid,
        month: Option<i32>,
        year: Option<i32>,
    ) -> Result<SpendingAnalysis, AnalysisError>;

    /// Categories whose spend exceeds their budget allocation for the
    /// period, sorted descending by overspent amount. A missing user or a
    /// zero monthly budget yields an empty list.
    async fn overspending(
        &self,
        user_id: Uuid,
        month: Option<i32>,
        year: Option<i32>,
    ) -> Result<Vec<OverspendingCategory>, AnalysisError>;
}

/// Sum expense amounts per category display name. Expenses whose category
/// no longer exists in the directory are silently dropped; categories with
/// no spend are absent from the result.
pub fn categorize_expenses(
    expenses: &[Expense],
    categories: &[Category],
) -> HashMap<String, Decimal> {
    let by_id: HashMap<Uuid, &Category> = categories.iter().map(|c| (c.id, c)).collect();

    let mut breakdown: HashMap<String, Decimal> = HashMap::new();
    for expense in expenses {
        if let Some(category) = by_id.get(&expense.category_id) {
            *breakdown.entry(category.name.clone()).or_default() += expense.amount;
        }
    }

    breakdown
}

/// Compare per-category spend against the user's budget allocation.
/// Categories with a zero percentage are skipped: no allocation means no
/// overspending concept (and no division by zero).
fn detect_overspending(
    breakdown: &HashMap<String, Decimal>,
    monthly_budget: Decimal,
    categories: &[Category],
) -> Vec<OverspendingCategory> {
    let by_name: HashMap<&str, &Category> =
        categories.iter().map(|c| (c.name.as_str(), c)).collect();

    let mut overspending = Vec::new();
    for (name, &spent) in breakdown {
        let Some(category) = by_name.get(name.as_str()) else {
            continue;
        };
        if category.budget_percentage.is_zero() {
            continue;
        }

        let expected = monthly_budget * category.budget_percentage / HUNDRED;
        if spent > expected {
            let overspent = spent - expected;
            overspending.push(OverspendingCategory {
                category: name.clone(),
                spent,
                budget: expected,
                overspent,
                percentage: (overspent / expected * HUNDRED).round_dp(2),
            });
        }
    }

    // Largest overspend first; the ordering feeds recommendation priority
    overspending.sort_by(|a, b| b.overspent.cmp(&a.overspent));
    overspending
}

/// Previous calendar month with year rollback at January
fn previous_period(month: i32, year: i32) -> (i32, i32) {
    if month > 1 {
        (month - 1, year)
    } else {
        (12, year - 1)
    }
}

/// Implementation of AnalysisService
pub struct AnalysisServiceImpl {
    user_repository: Arc<dyn UserRepository>,
    category_repository: Arc<dyn CategoryRepository>,
    income_repository: Arc<dyn IncomeRepository>,
    expense_repository: Arc<dyn ExpenseRepository>,
    clock: Arc<dyn Clock>,
}

impl AnalysisServiceImpl {
    pub fn new(
        user_repository: Arc<dyn UserRepository>,
        category_repository: Arc<dyn CategoryRepository>,
        income_repository: Arc<dyn IncomeRepository>,
        expense_repository: Arc<dyn ExpenseRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            user_repository,
            category_repository,
            income_repository,
            expense_repository,
            clock,
        }
    }

    /// Resolve the requested period, reading the clock exactly once when
    /// either part is missing
    fn resolve_period(&self, month: Option<i32>, year: Option<i32>) -> (i32, i32) {
        match (month, year) {
            (Some(m), Some(y)) => (m, y),
            _ => {
                let now = self.clock.now();
                (now.month() as i32, now.year())
            }
        }
    }

    async fn overspending_for(
        &self,
        user_id: Uuid,
        month: i32,
        year: i32,
    ) -> Result<Vec<OverspendingCategory>, AnalysisError> {
        let Some(user) = self.user_repository.find_by_id(user_id).await? else {
            return Ok(Vec::new());
        };
        if user.monthly_budget.is_zero() {
            return Ok(Vec::new());
        }

        let expenses = self
            .expense_repository
            .find_by_user(user_id, Some((month, year)))
            .await?;
        let categories = self.category_repository.find_all().await?;
        let breakdown = categorize_expenses(&expenses, &categories);

        Ok(detect_overspending(
            &breakdown,
            user.monthly_budget,
            &categories,
        ))
    }
}

#[async_trait]
impl AnalysisService for AnalysisServiceImpl {
    async fn analyze(
        &self,
        user_id: Uuid,
        month: Option<i32>,
        year: Option<i32>,
    ) -> Result<SpendingAnalysis, AnalysisError> {
        let (month, year) = self.resolve_period(month, year);

        let income = self
            .income_repository
            .find_by_user(user_id, Some((month, year)))
            .await?;
        let expenses = self
            .expense_repository
            .find_by_user(user_id, Some((month, year)))
            .await?;

        let total_income: Decimal = income.iter().map(|i| i.amount).sum();
        let total_expenses: Decimal = expenses.iter().map(|e| e.amount).sum();
        let remaining_budget = total_income - total_expenses;

        let categories = self.category_repository.find_all().await?;
        let category_breakdown = categorize_expenses(&expenses, &categories);
        let overspending_categories = self.overspending_for(user_id, month, year).await?;

        let savings_rate = if total_income > Decimal::ZERO {
            (remaining_budget / total_income * HUNDRED).round_dp(2)
        } else {
            Decimal::ZERO
        };

        let (prev_month, prev_year) = previous_period(month, year);
        let prev_expenses = self
            .expense_repository
            .find_by_user(user_id, Some((prev_month, prev_year)))
            .await?;
        let prev_total_expenses: Decimal = prev_expenses.iter().map(|e| e.amount).sum();

        let difference = total_expenses - prev_total_expenses;
        let percentage_change = if prev_total_expenses > Decimal::ZERO {
            (difference / prev_total_expenses * HUNDRED).round_dp(2)
        } else {
            Decimal::ZERO
        };

        Ok(SpendingAnalysis {
            total_income,
            total_expenses,
            remaining_budget,
            category_breakdown,
            overspending_categories,
            savings_rate,
            month_comparison: MonthComparison {
                current_month: total_expenses,
                previous_month: prev_total_expenses,
                difference,
                percentage_change,
            },
        })
    }

    async fn overspending(
        &self,
        user_id: Uuid,
        month: Option<i32>,
        year: Option<i32>,
    ) -> Result<Vec<OverspendingCategory>, AnalysisError> {
        let (month, year) = self.resolve_period(month, year);
        self.overspending_for(user_id, month, year).await
    }
}
