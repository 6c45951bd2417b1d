use async_trait::async_trait;
use thiserror::Error;

use crate::models::{Complaint, User};

pub mod memory;

pub use memory::{MemoryComplaintStore, MemoryUserStore};

/// Errors from the persistence boundary.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

/// Persistence of user records, keyed by unique username.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Persist the user, assigning an id when it has none. Saving a new user
    /// whose username already belongs to a different record is a conflict.
    async fn save(&self, user: User) -> Result<User, StoreError>;

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, StoreError>;
}

/// Persistence of complaint records, keyed by generated numeric id.
#[async_trait]
pub trait ComplaintStore: Send + Sync {
    /// Persist the complaint, assigning an id when it has none.
    async fn save(&self, complaint: Complaint) -> Result<Complaint, StoreError>;

    /// All complaints, in no guaranteed order.
    async fn find_all(&self) -> Result<Vec<Complaint>, StoreError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Complaint>, StoreError>;

    /// Idempotent: deleting an absent id is a silent no-op.
    async fn delete_by_id(&self, id: i64) -> Result<(), StoreError>;
}
