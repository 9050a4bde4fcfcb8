use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use super::RepositoryError;
use crate::models::user::{UpdateUserRequest, User};

/// Trait defining user repository operations
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Persist a new user
    async fn create(&self, user: User) -> Result<User, RepositoryError>;

    /// Find a user by ID
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, RepositoryError>;

    /// Find a user by email
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError>;

    /// Apply a partial field update; NotFound when the user does not exist
    async fn update(&self, id: Uuid, update: UpdateUserRequest) -> Result<(), RepositoryError>;
}

/// PostgreSQL implementation of UserRepository
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn create(&self, user: User) -> Result<User, RepositoryError> {
        let created = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (id, name, email, monthly_budget, created_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, name, email, monthly_budget, created_at
            "#,
        )
        .bind(user.id)
        .bind(&user.name)
        .bind(&user.email)
        .bind(user.monthly_budget)
        .bind(user.created_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, RepositoryError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email, monthly_budget, created_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email, monthly_budget, created_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn update(&self, id: Uuid, update: UpdateUserRequest) -> Result<(), RepositoryError> {
        // Build dynamic SQL from the fields actually present in the update
        let mut assignments = Vec::new();
        let mut param_count = 1;

        if update.name.is_some() {
            param_count += 1;
            assignments.push(format!("name = ${}", param_count));
        }
        if update.email.is_some() {
            param_count += 1;
            assignments.push(format!("email = ${}", param_count));
        }
        if update.monthly_budget.is_some() {
            param_count += 1;
            assignments.push(format!("monthly_budget = ${}", param_count));
        }

        if assignments.is_empty() {
            // Nothing to set; still report NotFound for unknown users
            return match self.find_by_id(id).await? {
                Some(_) => Ok(()),
                None => Err(RepositoryError::NotFound),
            };
        }

        let query = format!(
            "UPDATE users SET {} WHERE id = $1",
            assignments.join(", ")
        );

        let mut sqlx_query = sqlx::query(&query).bind(id);
        if let Some(name) = &update.name {
            sqlx_query = sqlx_query.bind(name);
        }
        if let Some(email) = &update.email {
            sqlx_query = sqlx_query.bind(email);
        }
        if let Some(budget) = update.monthly_budget {
            sqlx_query = sqlx_query.bind(budget);
        }

        let result = sqlx_query.execute(&self.pool).await?;
        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
