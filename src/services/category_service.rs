use async_trait::async_trait;
use rust_decimal::Decimal;
use std::sync::Arc;

use crate::generator::IdGenerator;
use crate::models::category::{Category, DEFAULT_CATEGORIES};
use crate::repositories::category_repository::CategoryRepository;
use crate::repositories::RepositoryError;

/// Category service errors
#[derive(Debug, thiserror::Error)]
pub enum CategoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl From<RepositoryError> for CategoryError {
    fn from(e: RepositoryError) -> Self {
        CategoryError::DatabaseError(e.to_string())
    }
}

/// Trait defining category service operations
#[async_trait]
pub trait CategoryService: Send + Sync {
    /// All categories in the directory, ordered by name
    async fn list_categories(&self) -> Result<Vec<Category>, CategoryError>;

    /// Insert the default directory if the store holds no categories yet.
    /// Idempotent: a non-empty directory is left untouched.
    async fn seed_defaults(&self) -> Result<(), CategoryError>;
}

/// Implementation of CategoryService
pub struct CategoryServiceImpl {
    category_repository: Arc<dyn CategoryRepository>,
    id_generator: Arc<dyn IdGenerator>,
}

impl CategoryServiceImpl {
    pub fn new(
        category_repository: Arc<dyn CategoryRepository>,
        id_generator: Arc<dyn IdGenerator>,
    ) -> Self {
        Self {
            category_repository,
            id_generator,
        }
    }
}

#[async_trait]
impl CategoryService for CategoryServiceImpl {
    async fn list_categories(&self) -> Result<Vec<Category>, CategoryError> {
        Ok(self.category_repository.find_all().await?)
    }

    async fn seed_defaults(&self) -> Result<(), CategoryError> {
        if self.category_repository.count().await? > 0 {
            return Ok(());
        }

        for seed in DEFAULT_CATEGORIES {
            let category = Category {
                id: self.id_generator.generate(),
                name: seed.name.to_string(),
                color: seed.color.to_string(),
                icon: seed.icon.to_string(),
                budget_percentage: Decimal::from(seed.budget_percentage),
            };
            self.category_repository.create(category).await?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::test_support::{InMemoryCategoryRepository, SequentialIds};
    use rust_decimal_macros::dec;
    use uuid::Uuid;

    fn service(repo: Arc<InMemoryCategoryRepository>) -> CategoryServiceImpl {
        CategoryServiceImpl::new(repo, Arc::new(SequentialIds::new()))
    }

    #[tokio::test]
    async fn seed_populates_empty_directory() {
        let repo = Arc::new(InMemoryCategoryRepository::new());
        let service = service(repo.clone());

        service.seed_defaults().await.unwrap();

        let categories = service.list_categories().await.unwrap();
        assert_eq!(categories.len(), DEFAULT_CATEGORIES.len());
        let food = categories
            .iter()
            .find(|c| c.name == "Food & Dining")
            .unwrap();
        assert_eq!(food.budget_percentage, dec!(15));
        assert_eq!(food.color, "#3B82F6");
    }

    #[tokio::test]
    async fn seed_is_idempotent() {
        let repo = Arc::new(InMemoryCategoryRepository::new());
        let service = service(repo.clone());

        service.seed_defaults().await.unwrap();
        let first = service.list_categories().await.unwrap();

        // Re-seeding a populated directory inserts nothing
        service.seed_defaults().await.unwrap();
        let second = service.list_categories().await.unwrap();

        assert_eq!(first.len(), second.len());
        let first_ids: Vec<Uuid> = first.iter().map(|c| c.id).collect();
        let second_ids: Vec<Uuid> = second.iter().map(|c| c.id).collect();
        assert_eq!(first_ids, second_ids);
    }

    #[tokio::test]
    async fn list_is_ordered_by_name() {
        let repo = Arc::new(InMemoryCategoryRepository::new());
        let service = service(repo);

        service.seed_defaults().await.unwrap();
        let categories = service.list_categories().await.unwrap();

        let names: Vec<&str> = categories.iter().map(|c| c.name.as_str()).collect();
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
    }
}
