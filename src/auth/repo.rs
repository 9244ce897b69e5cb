use std::collections::HashMap;
use std::sync::Mutex;

use axum::async_trait;
use sqlx::PgPool;
use thiserror::Error;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::auth::repo_types::{NewUser, User};

/// Errors surfaced by a user store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The unique index on `email` rejected the write.
    #[error("email already registered")]
    DuplicateEmail,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Persistence seam for user records.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Find a user by email.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;

    /// Insert a new user. A concurrent write of the same email loses and
    /// gets [`StoreError::DuplicateEmail`].
    async fn insert(&self, new: NewUser) -> Result<User, StoreError>;
}

/// Postgres-backed store. The unique index on `users.email` is the source
/// of truth for uniqueness; any pre-check by callers is advisory.
#[derive(Clone)]
pub struct PgUserStore {
    db: PgPool,
}

impl PgUserStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email, password_hash, created_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.db)
        .await
        .map_err(anyhow::Error::from)?;
        Ok(user)
    }

    async fn insert(&self, new: NewUser) -> Result<User, StoreError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (name, email, password_hash)
            VALUES ($1, $2, $3)
            RETURNING id, name, email, password_hash, created_at
            "#,
        )
        .bind(&new.name)
        .bind(&new.email)
        .bind(&new.password_hash)
        .fetch_one(&self.db)
        .await
        .map_err(|e| {
            if e.as_database_error()
                .is_some_and(|db| db.is_unique_violation())
            {
                StoreError::DuplicateEmail
            } else {
                StoreError::Other(e.into())
            }
        })?;
        Ok(user)
    }
}

/// In-memory store keyed by email, used by `AppState::fake()` and the
/// service tests. The insert is atomic under the lock, mirroring the
/// database's unique index.
#[derive(Default)]
pub struct MemoryUserStore {
    users: Mutex<HashMap<String, User>>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let users = self.users.lock().expect("user map lock");
        Ok(users.get(email).cloned())
    }

    async fn insert(&self, new: NewUser) -> Result<User, StoreError> {
        let mut users = self.users.lock().expect("user map lock");
        if users.contains_key(&new.email) {
            return Err(StoreError::DuplicateEmail);
        }
        let user = User {
            id: Uuid::new_v4(),
            name: new.name,
            email: new.email.clone(),
            password_hash: new.password_hash,
            created_at: OffsetDateTime::now_utc(),
        };
        users.insert(new.email, user.clone());
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_user(email: &str) -> NewUser {
        NewUser {
            name: None,
            email: email.into(),
            password_hash: "$argon2id$v=19$m=19456,t=2,p=1$abc$def".into(),
        }
    }

    #[tokio::test]
    async fn memory_store_find_round_trips() {
        let store = MemoryUserStore::new();
        assert!(store.find_by_email("a@x.com").await.unwrap().is_none());

        let created = store.insert(new_user("a@x.com")).await.unwrap();
        let found = store.find_by_email("a@x.com").await.unwrap().unwrap();
        assert_eq!(found.id, created.id);
        assert_eq!(found.email, "a@x.com");
    }

    #[tokio::test]
    async fn memory_store_enforces_unique_email() {
        let store = MemoryUserStore::new();
        store.insert(new_user("a@x.com")).await.expect("first insert");

        let err = store.insert(new_user("a@x.com")).await.unwrap_err();
        assert!(matches!(err, StoreError::DuplicateEmail));
    }
}
