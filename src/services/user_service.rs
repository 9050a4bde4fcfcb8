use async_trait::async_trait;
use rust_decimal::Decimal;
use std::sync::Arc;
use uuid::Uuid;

use crate::generator::{Clock, IdGenerator};
use crate::models::user::{CreateUserRequest, UpdateUserRequest, User};
use crate::repositories::user_repository::UserRepository;
use crate::repositories::RepositoryError;

/// User service errors
#[derive(Debug, thiserror::Error)]
pub enum UserError {
    #[error("A user with this email is already registered")]
    EmailTaken,

    #[error("User not found")]
    UserNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl From<RepositoryError> for UserError {
    fn from(e: RepositoryError) -> Self {
        match e {
            RepositoryError::NotFound => UserError::UserNotFound,
            RepositoryError::ConstraintViolation(_) => UserError::EmailTaken,
            RepositoryError::DatabaseError(msg) => UserError::DatabaseError(msg),
        }
    }
}

/// Trait defining user service operations
#[async_trait]
pub trait UserService: Send + Sync {
    /// Register a new user; fails when the email is already registered
    async fn register(&self, request: CreateUserRequest) -> Result<User, UserError>;

    /// Look up a user by ID
    async fn get_user(&self, user_id: Uuid) -> Result<User, UserError>;

    /// Apply a partial update to an existing user
    async fn update_user(&self, user_id: Uuid, update: UpdateUserRequest)
        -> Result<(), UserError>;
}

/// Implementation of UserService
pub struct UserServiceImpl {
    user_repository: Arc<dyn UserRepository>,
    id_generator: Arc<dyn IdGenerator>,
    clock: Arc<dyn Clock>,
}

impl UserServiceImpl {
    pub fn new(
        user_repository: Arc<dyn UserRepository>,
        id_generator: Arc<dyn IdGenerator>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            user_repository,
            id_generator,
            clock,
        }
    }
}

#[async_trait]
impl UserService for UserServiceImpl {
    async fn register(&self, request: CreateUserRequest) -> Result<User, UserError> {
        // Check-before-insert; the unique index on email backstops races
        if self
            .user_repository
            .find_by_email(&request.email)
            .await?
            .is_some()
        {
            return Err(UserError::EmailTaken);
        }

        let user = User {
            id: self.id_generator.generate(),
            name: request.name,
            email: request.email,
            monthly_budget: request.monthly_budget.unwrap_or(Decimal::ZERO),
            created_at: self.clock.now(),
        };

        Ok(self.user_repository.create(user).await?)
    }

    async fn get_user(&self, user_id: Uuid) -> Result<User, UserError> {
        self.user_repository
            .find_by_id(user_id)
            .await?
            .ok_or(UserError::UserNotFound)
    }

    async fn update_user(
        &self,
        user_id: Uuid,
        update: UpdateUserRequest,
    ) -> Result<(), UserError> {
        Ok(self.user_repository.update(user_id, update).await?)
    }
}
