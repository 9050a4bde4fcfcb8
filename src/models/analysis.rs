use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use utoipa::ToSchema;

/// One category whose spending exceeded its budget allocation for the month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct OverspendingCategory {
    pub category: String,
    pub spent: Decimal,
    /// Budget allocation: monthly_budget * budget_percentage / 100
    pub budget: Decimal,
    /// spent - budget, always positive for emitted records
    pub overspent: Decimal,
    /// overspent / budget * 100, rounded to two decimal places
    pub percentage: Decimal,
}

/// Current-versus-previous-month expense comparison
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MonthComparison {
    pub current_month: Decimal,
    pub previous_month: Decimal,
    pub difference: Decimal,
    /// Zero when the previous month had no expenses
    pub percentage_change: Decimal,
}

/// Full monthly spending report for one user
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SpendingAnalysis {
    pub total_income: Decimal,
    pub total_expenses: Decimal,
    /// total_income - total_expenses, may be negative
    pub remaining_budget: Decimal,
    /// Category name -> summed spend; sparse, zero-spend categories omitted
    pub category_breakdown: HashMap<String, Decimal>,
    /// Sorted descending by overspent amount
    pub overspending_categories: Vec<OverspendingCategory>,
    /// Remaining budget as a percentage of total income, zero when no income
    pub savings_rate: Decimal,
    pub month_comparison: MonthComparison,
}

/// Savings advice for one overspent category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SavingsRecommendation {
    pub category: String,
    pub current_spending: Decimal,
    pub recommended_budget: Decimal,
    /// Equal to the overspend amount for the category
    pub potential_savings: Decimal,
    pub tips: Vec<String>,
}
