use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use super::RepositoryError;
use crate::models::expense::Expense;

/// Trait defining expense repository operations
#[async_trait]
pub trait ExpenseRepository: Send + Sync {
    /// Persist a new expense record
    async fn create(&self, expense: Expense) -> Result<Expense, RepositoryError>;

    /// All expenses for a user, optionally narrowed to one (month, year),
    /// sorted by date descending
    async fn find_by_user(
        &self,
        user_id: Uuid,
        period: Option<(i32, i32)>,
    ) -> Result<Vec<Expense>, RepositoryError>;

    /// Delete an expense by ID; NotFound when the record does not exist
    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
}

/// PostgreSQL implementation of ExpenseRepository
pub struct PostgresExpenseRepository {
    pool: PgPool,
}

impl PostgresExpenseRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ExpenseRepository for PostgresExpenseRepository {
    async fn create(&self, expense: Expense) -> Result<Expense, RepositoryError> {
        let created = sqlx::query_as::<_, Expense>(
            r#"
            INSERT INTO expenses (id, user_id, amount, description, category_id, date, month, year)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id, user_id, amount, description, category_id, date, month, year
            "#,
        )
        .bind(expense.id)
        .bind(expense.user_id)
        .bind(expense.amount)
        .bind(&expense.description)
        .bind(expense.category_id)
        .bind(expense.date)
        .bind(expense.month)
        .bind(expense.year)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    async fn find_by_user(
        &self,
        user_id: Uuid,
        period: Option<(i32, i32)>,
    ) -> Result<Vec<Expense>, RepositoryError> {
        let mut query = String::from(
            r#"
            SELECT id, user_id, amount, description, category_id, date, month, year
            FROM expenses
            WHERE user_id = $1
            "#,
        );

        if period.is_some() {
            query.push_str(" AND month = $2 AND year = $3");
        }
        query.push_str(" ORDER BY date DESC");

        let mut sqlx_query = sqlx::query_as::<_, Expense>(&query).bind(user_id);
        if let Some((month, year)) = period {
            sqlx_query = sqlx_query.bind(month).bind(year);
        }

        let expenses = sqlx_query.fetch_all(&self.pool).await?;
        Ok(expenses)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM expenses WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
