use std::sync::Arc;

use async_trait::async_trait;

use crate::modules::auth::application::domain::entities::{
    RegisterUser, RegisterUserError, User,
};
use crate::modules::auth::application::ports::outgoing::{
    NewUser, PasswordHasher, UserQuery, UserRepository, UserRepositoryError,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateUserError {
    #[error("{0}")]
    InvalidInput(#[from] RegisterUserError),
    #[error("Username is already taken")]
    UsernameAlreadyExists,
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait ICreateUserUseCase: Send + Sync {
    async fn execute(
        &self,
        username: String,
        password: String,
        full_name: String,
    ) -> Result<User, CreateUserError>;
}

#[derive(Clone)]
pub struct CreateUserUseCase<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    query: Q,
    repository: R,
    password_hasher: Arc<dyn PasswordHasher>,
}

impl<Q, R> CreateUserUseCase<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    pub fn new(query: Q, repository: R, password_hasher: Arc<dyn PasswordHasher>) -> Self {
        Self {
            query,
            repository,
            password_hasher,
        }
    }
}

#[async_trait]
impl<Q, R> ICreateUserUseCase for CreateUserUseCase<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    async fn execute(
        &self,
        username: String,
        password: String,
        full_name: String,
    ) -> Result<User, CreateUserError> {
        let registration = RegisterUser::new(username, password, full_name)?;

        let existing = self
            .query
            .find_by_username(registration.username())
            .await
            .map_err(|e| CreateUserError::RepositoryError(e.to_string()))?;
        if existing.is_some() {
            return Err(CreateUserError::UsernameAlreadyExists);
        }

        let password_hash = self
            .password_hasher
            .hash_password(registration.password())
            .await
            .map_err(|e| CreateUserError::HashingFailed(e.to_string()))?;

        // The unique index still wins if two registrations race past the lookup.
        self.repository
            .create_user(NewUser {
                username: registration.username().to_string(),
                password_hash,
                full_name: registration.full_name().to_string(),
            })
            .await
            .map_err(|e| match e {
                UserRepositoryError::UserAlreadyExists => CreateUserError::UsernameAlreadyExists,
                UserRepositoryError::DatabaseError(msg) => CreateUserError::RepositoryError(msg),
            })
    }
}
