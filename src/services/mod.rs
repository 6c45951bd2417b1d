pub mod auth_service;
pub mod complaint_service;

pub use auth_service::{AuthError, AuthIdentity, AuthService};
pub use complaint_service::{ComplaintError, ComplaintService};
