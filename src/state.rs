use std::sync::Arc;

use crate::services::{AuthService, ComplaintService};
use crate::store::{MemoryComplaintStore, MemoryUserStore};

/// Shared handler state. Services are behind Arcs so the state stays cheap to
/// clone per request.
#[derive(Clone)]
pub struct AppState {
    pub auth: Arc<AuthService>,
    pub complaints: Arc<ComplaintService>,
}

impl AppState {
    /// State backed by fresh in-memory stores.
    pub fn in_memory() -> Self {
        Self {
            auth: Arc::new(AuthService::new(Arc::new(MemoryUserStore::new()))),
            complaints: Arc::new(ComplaintService::new(Arc::new(MemoryComplaintStore::new()))),
        }
    }
}
