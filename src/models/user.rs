use serde::Serialize;

/// Account record keyed by unique username.
///
/// `password` holds the argon2 hash, never plaintext, and is excluded from
/// serialized output so it can never leak into a response body.
#[derive(Debug, Clone, Serialize)]
pub struct User {
    /// Assigned by the store on first save; immutable afterwards.
    pub id: Option<i64>,
    pub username: String,
    #[serde(skip_serializing)]
    pub password: String,
    /// Open set ("ADMIN", "STUDENT", "STAFF", ...); only ADMIN carries
    /// special meaning for authorization.
    pub role: String,
}

impl User {
    pub fn new(username: impl Into<String>, password_hash: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            id: None,
            username: username.into(),
            password: password_hash.into(),
            role: role.into(),
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role == "ADMIN"
    }
}
