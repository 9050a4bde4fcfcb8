//! In-memory repository doubles and deterministic generators shared by the
//! service unit tests.

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::Mutex;
use uuid::Uuid;

use crate::generator::{Clock, IdGenerator};
use crate::models::category::Category;
use crate::models::expense::Expense;
use crate::models::income::Income;
use crate::models::user::{UpdateUserRequest, User};
use crate::repositories::category_repository::CategoryRepository;
use crate::repositories::expense_repository::ExpenseRepository;
use crate::repositories::income_repository::IncomeRepository;
use crate::repositories::user_repository::UserRepository;
use crate::repositories::RepositoryError;

/// Deterministic ID source: 1, 2, 3, ... encoded as UUIDs
pub struct SequentialIds {
    next: AtomicU64,
}

impl SequentialIds {
    pub fn new() -> Self {
        Self { next: AtomicU64::new(1) }
    }
}

impl IdGenerator for SequentialIds {
    fn generate(&self) -> Uuid {
        Uuid::from_u128(self.next.fetch_add(1, Ordering::SeqCst) as u128)
    }
}

/// Clock pinned to a fixed instant, counting how often it is read
pub struct FixedClock {
    now: DateTime<Utc>,
    calls: AtomicUsize,
}

impl FixedClock {
    pub fn at(now: DateTime<Utc>) -> Self {
        Self { now, calls: AtomicUsize::new(0) }
    }

    /// Mid-January 2024, the reference instant used across the tests
    pub fn jan_2024() -> Self {
        Self::at(Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap())
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.now
    }
}

pub struct InMemoryUserRepository {
    users: Mutex<HashMap<Uuid, User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self { users: Mutex::new(HashMap::new()) }
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: User) -> Result<User, RepositoryError> {
        let mut users = self.users.lock().unwrap();
        if users.values().any(|u| u.email == user.email) {
            return Err(RepositoryError::ConstraintViolation(
                "duplicate email".to_string(),
            ));
        }
        users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, RepositoryError> {
        Ok(self.users.lock().unwrap().get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .values()
            .find(|u| u.email == email)
            .cloned())
    }

    async fn update(&self, id: Uuid, update: UpdateUserRequest) -> Result<(), RepositoryError> {
        let mut users = self.users.lock().unwrap();
        let user = users.get_mut(&id).ok_or(RepositoryError::NotFound)?;
        if let Some(name) = update.name {
            user.name = name;
        }
        if let Some(email) = update.email {
            user.email = email;
        }
        if let Some(budget) = update.monthly_budget {
            user.monthly_budget = budget;
        }
        Ok(())
    }
}

pub struct InMemoryCategoryRepository {
    categories: Mutex<Vec<Category>>,
}

impl InMemoryCategoryRepository {
    pub fn new() -> Self {
        Self { categories: Mutex::new(Vec::new()) }
    }

    /// Remove a category out-of-band, simulating directory drift against
    /// historical expenses
    pub fn remove(&self, id: Uuid) {
        self.categories.lock().unwrap().retain(|c| c.id != id);
    }
}

#[async_trait]
impl CategoryRepository for InMemoryCategoryRepository {
    async fn create(&self, category: Category) -> Result<Category, RepositoryError> {
        let mut categories = self.categories.lock().unwrap();
        if categories.iter().any(|c| c.name == category.name) {
            return Err(RepositoryError::ConstraintViolation(
                "duplicate category name".to_string(),
            ));
        }
        categories.push(category.clone());
        Ok(category)
    }

    async fn find_all(&self) -> Result<Vec<Category>, RepositoryError> {
        let mut categories = self.categories.lock().unwrap().clone();
        categories.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(categories)
    }

    async fn count(&self) -> Result<i64, RepositoryError> {
        Ok(self.categories.lock().unwrap().len() as i64)
    }
}

pub struct InMemoryIncomeRepository {
    records: Mutex<Vec<Income>>,
}

impl InMemoryIncomeRepository {
    pub fn new() -> Self {
        Self { records: Mutex::new(Vec::new()) }
    }
}

#[async_trait]
impl IncomeRepository for InMemoryIncomeRepository {
    async fn create(&self, income: Income) -> Result<Income, RepositoryError> {
        self.records.lock().unwrap().push(income.clone());
        Ok(income)
    }

    async fn find_by_user(
        &self,
        user_id: Uuid,
        period: Option<(i32, i32)>,
    ) -> Result<Vec<Income>, RepositoryError> {
        let mut records: Vec<Income> = self
            .records
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.user_id == user_id)
            .filter(|r| period.map_or(true, |(m, y)| r.month == m && r.year == y))
            .cloned()
            .collect();
        records.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(records)
    }
}

pub struct InMemoryExpenseRepository {
    records: Mutex<Vec<Expense>>,
}

impl InMemoryExpenseRepository {
    pub fn new() -> Self {
        Self { records: Mutex::new(Vec::new()) }
    }
}

#[async_trait]
impl ExpenseRepository for InMemoryExpenseRepository {
    async fn create(&self, expense: Expense) -> Result<Expense, RepositoryError> {
        self.records.lock().unwrap().push(expense.clone());
        Ok(expense)
    }

    async fn find_by_user(
        &self,
        user_id: Uuid,
        period: Option<(i32, i32)>,
    ) -> Result<Vec<Expense>, RepositoryError> {
        let mut records: Vec<Expense> = self
            .records
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.user_id == user_id)
            .filter(|r| period.map_or(true, |(m, y)| r.month == m && r.year == y))
            .cloned()
            .collect();
        records.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(records)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        let mut records = self.records.lock().unwrap();
        let before = records.len();
        records.retain(|r| r.id != id);
        if records.len() == before {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
