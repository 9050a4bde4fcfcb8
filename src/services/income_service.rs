use async_trait::async_trait;
use chrono::Datelike;
use std::sync::Arc;
use uuid::Uuid;

use crate::generator::IdGenerator;
use crate::models::income::{CreateIncomeRequest, Income};
use crate::repositories::income_repository::IncomeRepository;
use crate::repositories::RepositoryError;

/// Income service errors
#[derive(Debug, thiserror::Error)]
pub enum IncomeError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl From<RepositoryError> for IncomeError {
    fn from(e: RepositoryError) -> Self {
        IncomeError::DatabaseError(e.to_string())
    }
}

/// Trait defining income service operations
#[async_trait]
pub trait IncomeService: Send + Sync {
    /// Record new income; month and year are derived from the date
    async fn add_income(&self, request: CreateIncomeRequest) -> Result<Income, IncomeError>;

    /// List income for a user; the period filter applies only when both
    /// month and year are given
    async fn list_income(
        &self,
        user_id: Uuid,
        period: Option<(i32, i32)>,
    ) -> Result<Vec<Income>, IncomeError>;
}

/// Implementation of IncomeService
pub struct IncomeServiceImpl {
    income_repository: Arc<dyn IncomeRepository>,
    id_generator: Arc<dyn IdGenerator>,
}

impl IncomeServiceImpl {
    pub fn new(
        income_repository: Arc<dyn IncomeRepository>,
        id_generator: Arc<dyn IdGenerator>,
    ) -> Self {
        Self {
            income_repository,
            id_generator,
        }
    }
}

#[async_trait]
impl IncomeService for IncomeServiceImpl {
    async fn add_income(&self, request: CreateIncomeRequest) -> Result<Income, IncomeError> {
        let income = Income {
            id: self.id_generator.generate(),
            user_id: request.user_id,
            amount: request.amount,
            source: request.source,
            month: request.date.month() as i32,
            year: request.date.year(),
            date: request.date,
        };

        Ok(self.income_repository.create(income).await?)
    }

    async fn list_income(
        &self,
        user_id: Uuid,
        period: Option<(i32, i32)>,
    ) -> Result<Vec<Income>, IncomeError> {
        Ok(self.income_repository.find_by_user(user_id, period).await?)
    }
}
