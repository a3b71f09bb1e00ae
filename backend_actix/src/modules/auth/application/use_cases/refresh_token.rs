use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Deserializer, Serialize};
use tracing::{debug, warn};

use crate::auth::application::{
    ports::outgoing::{TokenError, TokenProvider, TokenRepository},
    services::token_hasher::hash_token,
};

// ========================= Refresh Token Request =========================
/// Body shared by `PUT /authentications` and `DELETE /authentications`.
#[derive(Debug, Clone)]
pub struct RefreshTokenRequest {
    refresh_token: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum RefreshTokenRequestError {
    #[error("Refresh token cannot be empty")]
    EmptyToken,
}

impl RefreshTokenRequest {
    pub fn new(refresh_token: String) -> Result<Self, RefreshTokenRequestError> {
        let refresh_token = refresh_token.trim();
        if refresh_token.is_empty() {
            return Err(RefreshTokenRequestError::EmptyToken);
        }

        Ok(Self {
            refresh_token: refresh_token.to_string(),
        })
    }

    pub fn refresh_token(&self) -> &str {
        &self.refresh_token
    }
}

impl<'de> Deserialize<'de> for RefreshTokenRequest {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(rename_all = "camelCase")]
        struct RefreshTokenRequestHelper {
            refresh_token: String,
        }

        let helper = RefreshTokenRequestHelper::deserialize(deserializer)?;
        RefreshTokenRequest::new(helper.refresh_token).map_err(serde::de::Error::custom)
    }
}

// ====================== Refresh Token Error =============================
#[derive(Debug, Clone, thiserror::Error)]
pub enum RefreshTokenError {
    #[error("Refresh token has expired")]
    TokenExpired,
    #[error("Invalid refresh token")]
    TokenInvalid,
    #[error("Invalid token type")]
    InvalidTokenType,
    #[error("Refresh token is not registered")]
    TokenNotRegistered,
    #[error("Token generation failed: {0}")]
    TokenGenerationFailed(String),
    #[error("Token store error: {0}")]
    RepositoryError(String),
}

impl From<TokenError> for RefreshTokenError {
    fn from(error: TokenError) -> Self {
        match error {
            TokenError::TokenExpired => RefreshTokenError::TokenExpired,
            TokenError::InvalidTokenType(_) => RefreshTokenError::InvalidTokenType,
            TokenError::EncodingError(msg) => RefreshTokenError::TokenGenerationFailed(msg),
            TokenError::TokenNotYetValid
            | TokenError::InvalidSignature
            | TokenError::MalformedToken => RefreshTokenError::TokenInvalid,
        }
    }
}

// ============================ Refresh Token Response =========================
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshTokenResponse {
    pub access_token: String,
}

// ============================ Refresh Token Use Case =============================
#[async_trait]
pub trait IRefreshTokenUseCase: Send + Sync {
    async fn execute(
        &self,
        request: RefreshTokenRequest,
    ) -> Result<RefreshTokenResponse, RefreshTokenError>;
}

#[derive(Clone)]
pub struct RefreshTokenUseCase<T>
where
    T: TokenRepository,
{
    token_repository: T,
    token_provider: Arc<dyn TokenProvider>,
}

impl<T> RefreshTokenUseCase<T>
where
    T: TokenRepository,
{
    pub fn new(token_repository: T, token_provider: Arc<dyn TokenProvider>) -> Self {
        Self {
            token_repository,
            token_provider,
        }
    }
}

#[async_trait]
impl<T> IRefreshTokenUseCase for RefreshTokenUseCase<T>
where
    T: TokenRepository,
{
    async fn execute(
        &self,
        request: RefreshTokenRequest,
    ) -> Result<RefreshTokenResponse, RefreshTokenError> {
        let token = request.refresh_token();

        // Signature, expiry and token type first; a forged token never reaches Redis.
        let access_token = self.token_provider.refresh_access_token(token)?;

        let is_active = self
            .token_repository
            .is_refresh_token_active(&hash_token(token))
            .await
            .map_err(|e| RefreshTokenError::RepositoryError(e.to_string()))?;

        if !is_active {
            warn!("Refresh attempted with a revoked or unknown refresh token");
            return Err(RefreshTokenError::TokenNotRegistered);
        }

        debug!("Issued new access token from refresh token");
        Ok(RefreshTokenResponse { access_token })
    }
}
