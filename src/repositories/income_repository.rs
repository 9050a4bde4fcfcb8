use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use super::RepositoryError;
use crate::models::income::Income;

/// Trait defining income repository operations
#[async_trait]
pub trait IncomeRepository: Send + Sync {
    /// Persist a new income record
    async fn create(&self, income: Income) -> Result<Income, RepositoryError>;

    /// All income for a user, optionally narrowed to one (month, year),
    /// sorted by date descending
    async fn find_by_user(
        &self,
        user_id: Uuid,
        period: Option<(i32, i32)>,
    ) -> Result<Vec<Income>, RepositoryError>;
}

/// PostgreSQL implementation of IncomeRepository
pub struct PostgresIncomeRepository {
    pool: PgPool,
}

impl PostgresIncomeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl IncomeRepository for PostgresIncomeRepository {
    async fn create(&self, income: Income) -> Result<Income, RepositoryError> {
        let created = sqlx::query_as::<_, Income>(
            r#"
            INSERT INTO income (id, user_id, amount, source, date, month, year)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, user_id, amount, source, date, month, year
            "#,
        )
        .bind(income.id)
        .bind(income.user_id)
        .bind(income.amount)
        .bind(&income.source)
        .bind(income.date)
        .bind(income.month)
        .bind(income.year)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    async fn find_by_user(
        &self,
        user_id: Uuid,
        period: Option<(i32, i32)>,
    ) -> Result<Vec<Income>, RepositoryError> {
        let mut query = String::from(
            r#"
            SELECT id, user_id, amount, source, date, month, year
            FROM income
            WHERE user_id = $1
            "#,
        );

        if period.is_some() {
            query.push_str(" AND month = $2 AND year = $3");
        }
        query.push_str(" ORDER BY date DESC");

        let mut sqlx_query = sqlx::query_as::<_, Income>(&query).bind(user_id);
        if let Some((month, year)) = period {
            sqlx_query = sqlx_query.bind(month).bind(year);
        }

        let income = sqlx_query.fetch_all(&self.pool).await?;
        Ok(income)
    }
}
