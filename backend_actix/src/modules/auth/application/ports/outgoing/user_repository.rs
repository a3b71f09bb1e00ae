use crate::modules::auth::application::domain::entities::User;
use async_trait::async_trait;

#[derive(Debug, Clone, thiserror::Error)]
pub enum UserRepositoryError {
    #[error("User already exists")]
    UserAlreadyExists,
    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Row data for a user that has not been persisted yet. Id and timestamps
/// are assigned by the repository.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub password_hash: String,
    pub full_name: String,
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create_user(&self, user: NewUser) -> Result<User, UserRepositoryError>;
}
