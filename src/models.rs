pub mod analysis;
pub mod category;
pub mod expense;
pub mod income;
pub mod user;

pub use analysis::{
    MonthComparison, OverspendingCategory, SavingsRecommendation, SpendingAnalysis,
};
pub use category::{Category, CategorySeed, DEFAULT_CATEGORIES};
pub use expense::{CreateExpenseRequest, Expense};
pub use income::{CreateIncomeRequest, Income};
pub use user::{CreateUserRequest, UpdateUserRequest, User};
