use std::sync::Arc;

use thiserror::Error;

use crate::models::Complaint;
use crate::store::{ComplaintStore, StoreError};

#[derive(Debug, Error)]
pub enum ComplaintError {
    #[error("Complaint not found with ID: {0}")]
    NotFound(i64),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// CRUD plus the status-transition update for complaints.
pub struct ComplaintService {
    complaints: Arc<dyn ComplaintStore>,
}

impl ComplaintService {
    pub fn new(complaints: Arc<dyn ComplaintStore>) -> Self {
        Self { complaints }
    }

    /// Persist a submission as-is; status and category come from the caller.
    pub async fn create(&self, complaint: Complaint) -> Result<Complaint, ComplaintError> {
        Ok(self.complaints.save(complaint).await?)
    }

    pub async fn list_all(&self) -> Result<Vec<Complaint>, ComplaintError> {
        Ok(self.complaints.find_all().await?)
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Option<Complaint>, ComplaintError> {
        Ok(self.complaints.find_by_id(id).await?)
    }

    /// Overwrite only the status field. Any string is accepted here; the
    /// ADMIN gate on resolved-state transitions lives in the API layer.
    pub async fn update_status(
        &self,
        id: i64,
        new_status: &str,
    ) -> Result<Complaint, ComplaintError> {
        let mut complaint = self
            .complaints
            .find_by_id(id)
            .await?
            .ok_or(ComplaintError::NotFound(id))?;

        complaint.status = new_status.to_string();
        Ok(self.complaints.save(complaint).await?)
    }

    /// Unconditional delete; absent ids are a store-level no-op.
    pub async fn delete(&self, id: i64) -> Result<(), ComplaintError> {
        Ok(self.complaints.delete_by_id(id).await?)
    }
}
