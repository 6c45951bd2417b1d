use serde::{Deserialize, Serialize};

/// A filed complaint. Free-standing record: not linked to the submitting user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Complaint {
    /// Assigned by the store on first save; immutable afterwards.
    pub id: Option<i64>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Informally one of PENDING / IN_PROGRESS / RESOLVED, but stored as-is.
    #[serde(default)]
    pub status: String,
    /// Complainant category (STUDENT, STAFF, FACULTY, ...), supplied by the
    /// caller and not validated against any user role.
    #[serde(default)]
    pub category: String,
}

/// Status strings that count as a terminal "resolved" state. Transitions into
/// one of these require the ADMIN role gate.
pub fn is_resolved_status(status: &str) -> bool {
    status.eq_ignore_ascii_case("RESOLVED")
}
