pub mod category_repository;
pub mod expense_repository;
pub mod income_repository;
pub mod user_repository;

pub use category_repository::{CategoryRepository, PostgresCategoryRepository};
pub use expense_repository::{ExpenseRepository, PostgresExpenseRepository};
pub use income_repository::{IncomeRepository, PostgresIncomeRepository};
pub use user_repository::{PostgresUserRepository, UserRepository};

/// Repository errors for database operations, shared across the four
/// record sets
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("Resource not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),
}

impl From<sqlx::Error> for RepositoryError {
    fn from(e: sqlx::Error) -> Self {
        match e {
            sqlx::Error::RowNotFound => RepositoryError::NotFound,
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                RepositoryError::ConstraintViolation(db_err.to_string())
            }
            other => RepositoryError::DatabaseError(other.to_string()),
        }
    }
}
