/// User type definitions
///
/// `User` is both the stored row and the wire representation; `NewUser` is the
/// creation payload and carries its own content validation.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Maximum accepted email length (RFC 5321 path limit)
pub const MAX_EMAIL_LEN: usize = 254;

/// Maximum accepted display name length
pub const MAX_NAME_LEN: usize = 100;

/// A stored user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    /// Auto-assigned identifier
    pub id: i64,
    /// Unique email address
    pub email: String,
    /// Optional display name
    pub name: Option<String>,
}

/// Request body for user creation
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewUser {
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
}

impl NewUser {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            name: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Check field contents and return the trimmed payload
    pub fn validate(self) -> Result<Self, ValidationError> {
        let email = self.email.trim().to_string();
        if email.is_empty() {
            return Err(ValidationError::Empty { field: "email" });
        }
        if email.chars().count() > MAX_EMAIL_LEN {
            return Err(ValidationError::TooLong {
                field: "email",
                max: MAX_EMAIL_LEN,
            });
        }
        if !looks_like_email(&email) {
            return Err(ValidationError::InvalidFormat {
                field: "email",
                reason: "expected local@domain",
            });
        }

        let name = match self.name {
            None => None,
            Some(raw) => {
                let name = raw.trim().to_string();
                if name.is_empty() {
                    return Err(ValidationError::Empty { field: "name" });
                }
                if name.chars().count() > MAX_NAME_LEN {
                    return Err(ValidationError::TooLong {
                        field: "name",
                        max: MAX_NAME_LEN,
                    });
                }
                Some(name)
            }
        };

        Ok(Self { email, name })
    }
}

fn looks_like_email(value: &str) -> bool {
    match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !value.chars().any(char::is_whitespace)
        }
        None => false,
    }
}

/// Validation error for user payloads
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Field is empty when it shouldn't be
    #[error("{field} cannot be empty")]
    Empty { field: &'static str },

    /// Field exceeds maximum length
    #[error("{field} exceeds maximum length of {max} characters")]
    TooLong { field: &'static str, max: usize },

    /// String doesn't match required format
    #[error("{field}: {reason}")]
    InvalidFormat { field: &'static str, reason: &'static str },
}
