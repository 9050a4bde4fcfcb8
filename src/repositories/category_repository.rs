use async_trait::async_trait;
use sqlx::PgPool;

use super::RepositoryError;
use crate::models::category::Category;

/// Trait defining category repository operations.
/// The directory is seeded once at startup and read-only afterwards.
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// Persist a new category
    async fn create(&self, category: Category) -> Result<Category, RepositoryError>;

    /// All categories in the directory, ordered by name
    async fn find_all(&self) -> Result<Vec<Category>, RepositoryError>;

    /// Number of categories currently in the directory
    async fn count(&self) -> Result<i64, RepositoryError>;
}

/// PostgreSQL implementation of CategoryRepository
pub struct PostgresCategoryRepository {
    pool: PgPool,
}

impl PostgresCategoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CategoryRepository for PostgresCategoryRepository {
    async fn create(&self, category: Category) -> Result<Category, RepositoryError> {
        let created = sqlx::query_as::<_, Category>(
            r#"
            INSERT INTO categories (id, name, color, icon, budget_percentage)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, name, color, icon, budget_percentage
            "#,
        )
        .bind(category.id)
        .bind(&category.name)
        .bind(&category.color)
        .bind(&category.icon)
        .bind(category.budget_percentage)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    async fn find_all(&self) -> Result<Vec<Category>, RepositoryError> {
        let categories = sqlx::query_as::<_, Category>(
            r#"
            SELECT id, name, color, icon, budget_percentage
            FROM categories
            ORDER BY name ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(categories)
    }

    async fn count(&self) -> Result<i64, RepositoryError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM categories")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}
