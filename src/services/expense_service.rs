use async_trait::async_trait;
use chrono::Datelike;
use std::sync::Arc;
use uuid::Uuid;

use crate::generator::IdGenerator;
use crate::models::expense::{CreateExpenseRequest, Expense};
use crate::repositories::expense_repository::ExpenseRepository;
use crate::repositories::RepositoryError;

/// Expense service errors
#[derive(Debug, thiserror::Error)]
pub enum ExpenseError {
    #[error("Expense not found")]
    ExpenseNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl From<RepositoryError> for ExpenseError {
    fn from(e: RepositoryError) -> Self {
        match e {
            RepositoryError::NotFound => ExpenseError::ExpenseNotFound,
            RepositoryError::DatabaseError(msg) | RepositoryError::ConstraintViolation(msg) => {
                ExpenseError::DatabaseError(msg)
            }
        }
    }
}

/// Trait defining expense service operations
#[async_trait]
pub trait ExpenseService: Send + Sync {
    /// Record a new expense; month and year are derived from the date.
    /// The category reference is advisory and not validated here.
    async fn add_expense(&self, request: CreateExpenseRequest) -> Result<Expense, ExpenseError>;

    /// List expenses for a user; the period filter applies only when both
    /// month and year are given
    async fn list_expenses(
        &self,
        user_id: Uuid,
        period: Option<(i32, i32)>,
    ) -> Result<Vec<Expense>, ExpenseError>;

    /// Delete an expense by ID
    async fn delete_expense(&self, expense_id: Uuid) -> Result<(), ExpenseError>;
}

/// Implementation of ExpenseService
pub struct ExpenseServiceImpl {
    expense_repository: Arc<dyn ExpenseRepository>,
    id_generator: Arc<dyn IdGenerator>,
}

impl ExpenseServiceImpl {
    pub fn new(
        expense_repository: Arc<dyn ExpenseRepository>,
        id_generator: Arc<dyn IdGenerator>,
    ) -> Self {
        Self {
            expense_repository,
            id_generator,
        }
    }
}

#[async_trait]
impl ExpenseService for ExpenseServiceImpl {
    async fn add_expense(&self, request: CreateExpenseRequest) -> Result<Expense, ExpenseError> {
        let expense = Expense {
            id: self.id_generator.generate(),
            user_id: request.user_id,
            amount: request.amount,
            description: request.description,
            category_id: request.category_id,
            month: request.date.month() as i32,
            year: request.date.year(),
            date: request.date,
        };

        Ok(self.expense_repository.create(expense).await?)
    }

    async fn list_expenses(
        &self,
        user_id: Uuid,
        period: Option<(i32, i32)>,
    ) -> Result<Vec<Expense>, ExpenseError> {
        Ok(self
            .expense_repository
            .find_by_user(user_id, period)
            .await?)
    }

    async fn delete_expense(&self, expense_id: Uuid) -> Result<(), ExpenseError> {
        Ok(self.expense_repository.delete(expense_id).await?)
    }
}
