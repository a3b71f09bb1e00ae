use crate::modules::auth::application::ports::outgoing::token_repository::{
    TokenRepository, TokenRepositoryError,
};
use async_trait::async_trait;
use deadpool_redis::{redis::AsyncCommands, Pool};

use std::sync::Arc;

use uuid::Uuid;

/// Redis-backed refresh token store.
///
/// ## Redis data model
/// ```text
/// auth:refresh:{token_hash} -> "{user_id}"
/// ```
/// - Exists ⇒ the refresh token may be exchanged for access tokens
/// - TTL = refresh token lifetime, so expired tokens clean themselves up
/// - Logout deletes the key
#[derive(Clone)]
pub struct RedisTokenRepository {
    pool: Arc<Pool>,
}

impl RedisTokenRepository {
    pub fn new(pool: Arc<Pool>) -> Self {
        Self { pool }
    }

    fn token_key(token_hash: &str) -> String {
        format!("auth:refresh:{token_hash}")
    }

    async fn get_conn(&self) -> Result<deadpool_redis::Connection, TokenRepositoryError> {
        self.pool
            .get()
            .await
            .map_err(|e| TokenRepositoryError::DatabaseError(format!("Pool error: {}", e)))
    }
}

#[async_trait]
impl TokenRepository for RedisTokenRepository {
    /// ```text
    /// SET auth:refresh:{hash} "{user_id}" EX <ttl>
    /// ```
    async fn store_refresh_token(
        &self,
        token_hash: &str,
        user_id: Uuid,
        ttl_seconds: i64,
    ) -> Result<(), TokenRepositoryError> {
        if ttl_seconds <= 0 {
            return Err(TokenRepositoryError::InvalidToken);
        }

        let mut conn = self.get_conn().await?;

        conn.set_ex::<_, _, ()>(
            Self::token_key(token_hash),
            user_id.to_string(),
            ttl_seconds as u64,
        )
        .await
        .map_err(|e| TokenRepositoryError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    async fn is_refresh_token_active(
        &self,
        token_hash: &str,
    ) -> Result<bool, TokenRepositoryError> {
        let mut conn = self.get_conn().await?;

        let exists: bool = conn
            .exists(Self::token_key(token_hash))
            .await
            .map_err(|e| TokenRepositoryError::DatabaseError(e.to_string()))?;

        Ok(exists)
    }

    /// `DEL` reports how many keys went away; zero means the token was never
    /// stored, already revoked, or expired.
    async fn revoke_refresh_token(&self, token_hash: &str) -> Result<(), TokenRepositoryError> {
        let mut conn = self.get_conn().await?;

        let removed: u64 = conn
            .del(Self::token_key(token_hash))
            .await
            .map_err(|e| TokenRepositoryError::DatabaseError(e.to_string()))?;

        if removed == 0 {
            return Err(TokenRepositoryError::TokenNotFound);
        }

        Ok(())
    }
}
