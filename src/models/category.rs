use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Seed data for the default category directory
pub struct CategorySeed {
    pub name: &'static str,
    pub color: &'static str,
    pub icon: &'static str,
    /// Share of the user's monthly budget expected for this category, 0-100
    pub budget_percentage: u32,
}

/// The fixed category directory inserted on first startup.
/// Percentages are a notional allocation and do not have to sum to 100.
pub const DEFAULT_CATEGORIES: &[CategorySeed] = &[
    CategorySeed { name: "Food & Dining", color: "#3B82F6", icon: "🍽️", budget_percentage: 15 },
    CategorySeed { name: "Transportation", color: "#10B981", icon: "🚗", budget_percentage: 12 },
    CategorySeed { name: "Entertainment", color: "#F59E0B", icon: "🎬", budget_percentage: 8 },
    CategorySeed { name: "Bills & Utilities", color: "#EF4444", icon: "⚡", budget_percentage: 25 },
    CategorySeed { name: "Healthcare", color: "#8B5CF6", icon: "🏥", budget_percentage: 10 },
    CategorySeed { name: "Shopping", color: "#EC4899", icon: "🛍️", budget_percentage: 10 },
    CategorySeed { name: "Housing", color: "#6B7280", icon: "🏠", budget_percentage: 30 },
    CategorySeed { name: "Education", color: "#14B8A6", icon: "📚", budget_percentage: 5 },
    CategorySeed { name: "Other", color: "#94A3B8", icon: "📦", budget_percentage: 5 },
];

/// Category entity representing a spending classification
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, sqlx::FromRow)]
pub struct Category {
    pub id: Uuid,
    pub name: String,
    pub color: String,
    pub icon: String,
    /// Share of the user's monthly budget expected for this category, 0-100
    pub budget_percentage: Decimal,
}
