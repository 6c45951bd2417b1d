use std::sync::Arc;

use thiserror::Error;
use tracing::info;

use crate::auth::password::{self, PasswordError};
use crate::models::User;
use crate::store::{StoreError, UserStore};

/// Identity returned on successful login.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthIdentity {
    pub username: String,
    pub role: String,
}

#[derive(Debug, Error)]
pub enum AuthError {
    /// Uniform failure for unknown username and wrong password, so a caller
    /// cannot probe which usernames exist.
    #[error("Invalid username or password")]
    InvalidCredentials,

    #[error("Username '{0}' is already taken")]
    UsernameTaken(String),

    #[error("Password error: {0}")]
    Password(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl From<PasswordError> for AuthError {
    fn from(err: PasswordError) -> Self {
        AuthError::Password(err.to_string())
    }
}

/// Credential verification and account creation.
pub struct AuthService {
    users: Arc<dyn UserStore>,
}

impl AuthService {
    pub fn new(users: Arc<dyn UserStore>) -> Self {
        Self { users }
    }

    /// Verify credentials and return the account identity.
    pub async fn login(&self, username: &str, plaintext: &str) -> Result<AuthIdentity, AuthError> {
        let user = match self.users.find_by_username(username).await? {
            Some(user) => user,
            None => return Err(AuthError::InvalidCredentials),
        };

        if !password::verify_password(plaintext, &user.password)? {
            return Err(AuthError::InvalidCredentials);
        }

        Ok(AuthIdentity {
            username: user.username,
            role: user.role,
        })
    }

    /// Create an account with a hashed password. Duplicate usernames are a
    /// conflict.
    pub async fn register(
        &self,
        username: &str,
        plaintext: &str,
        role: &str,
    ) -> Result<User, AuthError> {
        if self.users.find_by_username(username).await?.is_some() {
            return Err(AuthError::UsernameTaken(username.to_string()));
        }

        let hash = password::hash_password(plaintext)?;
        let user = self.users.save(User::new(username, hash, role)).await?;
        Ok(user)
    }

    /// Ensure the baseline accounts exist. Checked by username presence, so
    /// running this more than once never creates duplicates. Must complete
    /// before the server starts accepting logins.
    pub async fn seed_default_users(&self) -> Result<(), AuthError> {
        const DEFAULTS: &[(&str, &str, &str)] = &[
            ("admin", "admin123", "ADMIN"),
            ("student", "student123", "STUDENT"),
        ];

        for (username, plaintext, role) in DEFAULTS {
            if self.users.find_by_username(username).await?.is_some() {
                continue;
            }
            let hash = password::hash_password(plaintext)?;
            self.users.save(User::new(*username, hash, *role)).await?;
            info!("created default {} user: {}", role, username);
        }

        Ok(())
    }
}
