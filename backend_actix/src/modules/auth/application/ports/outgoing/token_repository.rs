use async_trait::async_trait;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TokenRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
    #[error("Token not found")]
    TokenNotFound,
    #[error("Invalid token")]
    InvalidToken,
}

/// Store of refresh tokens that are currently valid for renewal.
/// Keys are token hashes, never raw tokens.
#[async_trait]
pub trait TokenRepository: Send + Sync {
    async fn store_refresh_token(
        &self,
        token_hash: &str,
        user_id: Uuid,
        ttl_seconds: i64,
    ) -> Result<(), TokenRepositoryError>;

    async fn is_refresh_token_active(&self, token_hash: &str) -> Result<bool, TokenRepositoryError>;

    /// Fails with `TokenNotFound` when the hash was never stored or already revoked.
    async fn revoke_refresh_token(&self, token_hash: &str) -> Result<(), TokenRepositoryError>;
}
