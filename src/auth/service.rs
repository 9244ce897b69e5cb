use std::sync::Arc;

use crate::auth::dto::RegisterRequest;
use crate::auth::error::RegisterError;
use crate::auth::password::CredentialHasher;
use crate::auth::repo::UserStore;
use crate::auth::repo_types::{NewUser, User};

/// Registration with both collaborators injected: a user store and a
/// credential hasher. Stateless across calls.
pub struct RegistrationService {
    users: Arc<dyn UserStore>,
    hasher: Arc<dyn CredentialHasher>,
}

/// Registration input after normalization: trimmed name (empty becomes
/// absent), trimmed lowercase email.
struct NewAccount {
    name: Option<String>,
    email: String,
    password: String,
}

fn validate(req: RegisterRequest) -> Result<NewAccount, RegisterError> {
    let name = req
        .name
        .map(|n| n.trim().to_string())
        .filter(|n| !n.is_empty());

    let email = req
        .email
        .as_deref()
        .unwrap_or_default()
        .trim()
        .to_lowercase();
    if email.is_empty() {
        return Err(RegisterError::Validation("email is required"));
    }

    let password = match req.password {
        Some(p) if !p.is_empty() => p,
        _ => return Err(RegisterError::Validation("password is required")),
    };

    Ok(NewAccount {
        name,
        email,
        password,
    })
}

impl RegistrationService {
    pub fn new(users: Arc<dyn UserStore>, hasher: Arc<dyn CredentialHasher>) -> Self {
        Self { users, hasher }
    }

    /// Register a new account.
    ///
    /// The store's unique index is the source of truth for uniqueness; the
    /// lookup here is an early exit, and a concurrent duplicate write is
    /// still reported as [`RegisterError::Duplicate`]. The persistence
    /// write is the last step, so no failure path leaves a partial record.
    pub async fn register(&self, req: RegisterRequest) -> Result<User, RegisterError> {
        let account = validate(req)?;

        if self.users.find_by_email(&account.email).await?.is_some() {
            return Err(RegisterError::Duplicate);
        }

        let password_hash = self.hasher.hash(&account.password)?;

        let user = self
            .users
            .insert(NewUser {
                name: account.name,
                email: account.email,
                password_hash,
            })
            .await?;
        Ok(user)
    }
}
