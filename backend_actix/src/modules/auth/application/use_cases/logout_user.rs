use async_trait::async_trait;
use tracing::info;

use crate::auth::application::{
    ports::outgoing::{TokenRepository, TokenRepositoryError},
    services::token_hasher::hash_token,
};

use super::refresh_token::RefreshTokenRequest;

#[derive(Debug, Clone, thiserror::Error)]
pub enum LogoutError {
    #[error("Refresh token is not registered")]
    TokenNotRegistered,
    #[error("Token store error: {0}")]
    DatabaseError(String),
}

impl From<TokenRepositoryError> for LogoutError {
    fn from(error: TokenRepositoryError) -> Self {
        match error {
            TokenRepositoryError::TokenNotFound | TokenRepositoryError::InvalidToken => {
                LogoutError::TokenNotRegistered
            }
            TokenRepositoryError::DatabaseError(msg) => LogoutError::DatabaseError(msg),
        }
    }
}

#[async_trait]
pub trait ILogoutUseCase: Send + Sync {
    async fn execute(&self, request: RefreshTokenRequest) -> Result<(), LogoutError>;
}

#[derive(Clone)]
pub struct LogoutUseCase<T>
where
    T: TokenRepository,
{
    token_repository: T,
}

impl<T> LogoutUseCase<T>
where
    T: TokenRepository,
{
    pub fn new(token_repository: T) -> Self {
        Self { token_repository }
    }
}

#[async_trait]
impl<T> ILogoutUseCase for LogoutUseCase<T>
where
    T: TokenRepository,
{
    async fn execute(&self, request: RefreshTokenRequest) -> Result<(), LogoutError> {
        self.token_repository
            .revoke_refresh_token(&hash_token(request.refresh_token()))
            .await?;

        info!("Refresh token revoked");
        Ok(())
    }
}
