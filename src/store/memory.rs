use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::models::{Complaint, User};
use crate::store::{ComplaintStore, StoreError, UserStore};

/// In-memory user store. Single write lock per operation, so individual
/// save/find calls are atomic with respect to each other.
pub struct MemoryUserStore {
    users: RwLock<HashMap<i64, User>>,
    next_id: AtomicI64,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self {
            users: RwLock::new(HashMap::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn save(&self, mut user: User) -> Result<User, StoreError> {
        let mut users = self.users.write().await;

        // Username is the login key; a second record with the same username
        // would make lookup ambiguous.
        let taken = users
            .values()
            .any(|u| u.username == user.username && u.id != user.id);
        if taken {
            return Err(StoreError::Conflict(format!(
                "username '{}' already exists",
                user.username
            )));
        }

        let id = match user.id {
            Some(id) => id,
            None => {
                let id = self.next_id.fetch_add(1, Ordering::SeqCst);
                user.id = Some(id);
                id
            }
        };
        users.insert(id, user.clone());
        Ok(user)
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, StoreError> {
        let users = self.users.read().await;
        Ok(users.values().find(|u| u.username == username).cloned())
    }
}

/// In-memory complaint store.
pub struct MemoryComplaintStore {
    complaints: RwLock<HashMap<i64, Complaint>>,
    next_id: AtomicI64,
}

impl MemoryComplaintStore {
    pub fn new() -> Self {
        Self {
            complaints: RwLock::new(HashMap::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

#[async_trait]
impl ComplaintStore for MemoryComplaintStore {
    async fn save(&self, mut complaint: Complaint) -> Result<Complaint, StoreError> {
        let id = match complaint.id {
            Some(id) => id,
            None => {
                let id = self.next_id.fetch_add(1, Ordering::SeqCst);
                complaint.id = Some(id);
                id
            }
        };
        self.complaints.write().await.insert(id, complaint.clone());
        Ok(complaint)
    }

    async fn find_all(&self) -> Result<Vec<Complaint>, StoreError> {
        Ok(self.complaints.read().await.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Complaint>, StoreError> {
        Ok(self.complaints.read().await.get(&id).cloned())
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), StoreError> {
        self.complaints.write().await.remove(&id);
        Ok(())
    }
}
