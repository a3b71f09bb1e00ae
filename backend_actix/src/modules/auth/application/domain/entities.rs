use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use thiserror::Error;
use uuid::Uuid;

pub const USERNAME_MAX: usize = 50;

static USERNAME_RE: OnceLock<Regex> = OnceLock::new();

fn username_regex() -> &'static Regex {
    USERNAME_RE.get_or_init(|| {
        Regex::new("^[A-Za-z0-9_]+$")
            .unwrap_or_else(|error| panic!("username regex failed to compile: {error}"))
    })
}

/// Identity of an authenticated actor or a row owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(Uuid);

impl UserId {
    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl From<Uuid> for UserId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub full_name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegisterUserError {
    #[error("Username cannot be empty")]
    EmptyUsername,
    #[error("Username must be at most 50 characters")]
    UsernameTooLong,
    #[error("Username may only contain letters, digits and underscores")]
    InvalidUsernameCharacters,
    #[error("Password cannot be empty")]
    EmptyPassword,
    #[error("Full name cannot be empty")]
    EmptyFullName,
}

/// Registration payload that has passed field validation.
#[derive(Debug, Clone)]
pub struct RegisterUser {
    username: String,
    password: String,
    full_name: String,
}

impl RegisterUser {
    pub fn new(
        username: String,
        password: String,
        full_name: String,
    ) -> Result<Self, RegisterUserError> {
        let username = username.trim().to_string();
        if username.is_empty() {
            return Err(RegisterUserError::EmptyUsername);
        }
        if username.chars().count() > USERNAME_MAX {
            return Err(RegisterUserError::UsernameTooLong);
        }
        if !username_regex().is_match(&username) {
            return Err(RegisterUserError::InvalidUsernameCharacters);
        }

        if password.is_empty() {
            return Err(RegisterUserError::EmptyPassword);
        }

        let full_name = full_name.trim().to_string();
        if full_name.is_empty() {
            return Err(RegisterUserError::EmptyFullName);
        }

        Ok(Self {
            username,
            password,
            full_name,
        })
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn full_name(&self) -> &str {
        &self.full_name
    }
}
