use serde::{Deserialize, Serialize};

/// Stored credential record, keyed by email.
///
/// Passwords are held verbatim and checked by exact string equality. The
/// account store offers no hashing, lockout, or rate limiting.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub email: String,
    pub name: String,
    pub password: String,
    pub login_count: i64,
}

impl User {
    pub fn new(email: impl Into<String>, name: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            name: name.into(),
            password: password.into(),
            login_count: 0,
        }
    }

    pub fn password_matches(&self, candidate: &str) -> bool {
        self.password == candidate
    }
}
