use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use std::fmt;
use tracing;
use uuid::Uuid;

use crate::auth::application::ports::outgoing::token_provider::{
    TokenClaims, TokenError, TokenProvider, ACCESS_TOKEN, REFRESH_TOKEN,
};

use super::jwt_config::JwtConfig;

#[derive(Clone)]
pub struct JwtTokenService {
    config: JwtConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl fmt::Debug for JwtTokenService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtTokenService")
            .field("config", &"JwtConfig")
            .finish()
    }
}

impl JwtTokenService {
    pub fn new(config: JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret_key.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret_key.as_bytes());

        Self {
            config,
            encoding_key,
            decoding_key,
        }
    }

    fn generate_token(
        &self,
        user_id: Uuid,
        token_type: &str,
        expiry_seconds: i64,
    ) -> Result<String, TokenError> {
        let now = Utc::now();
        let expiration = now + Duration::seconds(expiry_seconds);

        let claims = TokenClaims {
            sub: user_id,
            exp: expiration.timestamp(),
            iat: now.timestamp(),
            nbf: now.timestamp(),
            token_type: token_type.to_string(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| TokenError::EncodingError(e.to_string()))
    }
}

impl TokenProvider for JwtTokenService {
    fn generate_access_token(&self, user_id: Uuid) -> Result<String, TokenError> {
        self.generate_token(user_id, ACCESS_TOKEN, self.config.access_token_expiry)
    }

    fn generate_refresh_token(&self, user_id: Uuid) -> Result<String, TokenError> {
        self.generate_token(user_id, REFRESH_TOKEN, self.config.refresh_token_expiry)
    }

    fn verify_token(&self, token: &str) -> Result<TokenClaims, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 30;
        validation.validate_nbf = true;

        let decoded =
            decode::<TokenClaims>(token, &self.decoding_key, &validation).map_err(|e| {
                use jsonwebtoken::errors::ErrorKind;

                match e.kind() {
                    ErrorKind::ExpiredSignature => {
                        tracing::debug!("Token verification failed: Token expired");
                        TokenError::TokenExpired
                    }
                    ErrorKind::ImmatureSignature => {
                        tracing::warn!("Token verification failed: Token not yet valid");
                        TokenError::TokenNotYetValid
                    }
                    ErrorKind::InvalidSignature => {
                        tracing::error!("Security alert: Invalid token signature detected");
                        TokenError::InvalidSignature
                    }
                    ErrorKind::InvalidToken | ErrorKind::InvalidAlgorithm => {
                        tracing::error!("Security alert: Malformed or invalid algorithm token");
                        TokenError::MalformedToken
                    }
                    ErrorKind::Base64(_) | ErrorKind::Json(_) | ErrorKind::Utf8(_) => {
                        tracing::warn!("Token verification failed: Malformed token");
                        TokenError::MalformedToken
                    }
                    _ => {
                        tracing::warn!("Token verification failed: Unknown error");
                        TokenError::MalformedToken
                    }
                }
            })?;

        Ok(decoded.claims)
    }

    fn refresh_access_token(&self, refresh_token: &str) -> Result<String, TokenError> {
        let claims = self.verify_token(refresh_token)?;

        if claims.token_type != REFRESH_TOKEN {
            tracing::warn!(
                "Token type mismatch: expected 'refresh', got '{}'",
                claims.token_type
            );
            return Err(TokenError::InvalidTokenType(REFRESH_TOKEN.to_string()));
        }

        self.generate_access_token(claims.sub)
    }

    fn refresh_token_ttl(&self) -> i64 {
        self.config.refresh_token_expiry
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_SECRET: &str = "FAKE_JWT_SECRET_DO_NOT_USE_IN_PRODUCTION";

    fn config(access_token_expiry: i64) -> JwtConfig {
        JwtConfig {
            secret_key: TEST_SECRET.to_string(),
            access_token_expiry,
            refresh_token_expiry: 86400,
        }
    }

    fn create_test_jwt_service() -> JwtTokenService {
        JwtTokenService::new(config(3600))
    }

    #[test]
    fn test_generate_and_verify_access_token() {
        let service = create_test_jwt_service();
        let user_id = Uuid::new_v4();

        let token = service
            .generate_access_token(user_id)
            .expect("Token should be generated");

        let claims = service.verify_token(&token).expect("Token should be valid");
        assert_eq!(claims.sub, user_id);
        assert_eq!(claims.token_type, "access");
        assert_eq!(claims.iat, claims.nbf);
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_generate_refresh_token() {
        let service = create_test_jwt_service();
        let user_id = Uuid::new_v4();

        let token = service.generate_refresh_token(user_id).unwrap();
        let claims = service.verify_token(&token).unwrap();

        assert_eq!(claims.sub, user_id);
        assert_eq!(claims.token_type, "refresh");
        assert_eq!(claims.exp - claims.iat, 86400);
    }

    #[test]
    fn test_invalid_token_verification() {
        let service = create_test_jwt_service();

        let result = service.verify_token("invalid.jwt.token");

        assert!(matches!(result, Err(TokenError::MalformedToken)));
    }

    #[test]
    fn test_malformed_token_base64_error() {
        let service = create_test_jwt_service();

        let result = service.verify_token("not.a.valid@base64.token!");

        assert!(matches!(result, Err(TokenError::MalformedToken)));
    }

    #[test]
    fn test_token_with_invalid_json() {
        use base64::{engine::general_purpose, Engine as _};
        let service = create_test_jwt_service();

        let header = general_purpose::STANDARD.encode(r#"{"alg":"HS256","typ":"JWT"}"#);
        let payload = general_purpose::STANDARD.encode("not valid json");
        let invalid_token = format!("{}.{}.fakesignature", header, payload);

        assert!(service.verify_token(&invalid_token).is_err());
    }

    #[test]
    fn test_expired_token() {
        // Beyond the 30 second leeway.
        let service = JwtTokenService::new(config(-35));

        let token = service.generate_access_token(Uuid::new_v4()).unwrap();
        let result = service.verify_token(&token);

        assert!(matches!(result, Err(TokenError::TokenExpired)));
    }

    #[test]
    fn test_invalid_signature() {
        let service = create_test_jwt_service();
        let token = service.generate_access_token(Uuid::new_v4()).unwrap();

        let other = JwtTokenService::new(JwtConfig {
            secret_key: format!("{}_DIFFERENT", TEST_SECRET),
            access_token_expiry: 3600,
            refresh_token_expiry: 86400,
        });

        assert!(matches!(
            other.verify_token(&token),
            Err(TokenError::InvalidSignature)
        ));
    }

    #[test]
    fn test_refresh_access_token_success() {
        let service = create_test_jwt_service();
        let user_id = Uuid::new_v4();

        let refresh_token = service.generate_refresh_token(user_id).unwrap();
        let access_token = service.refresh_access_token(&refresh_token).unwrap();

        let claims = service.verify_token(&access_token).unwrap();
        assert_eq!(claims.sub, user_id);
        assert_eq!(claims.token_type, "access");
    }

    #[test]
    fn test_refresh_access_token_with_access_token_fails() {
        let service = create_test_jwt_service();
        let access_token = service.generate_access_token(Uuid::new_v4()).unwrap();

        let result = service.refresh_access_token(&access_token);

        assert!(matches!(result, Err(TokenError::InvalidTokenType(t)) if t == "refresh"));
    }

    #[test]
    fn test_refresh_access_token_with_tampered_token() {
        let service = create_test_jwt_service();
        let mut token = service.generate_refresh_token(Uuid::new_v4()).unwrap();
        token.push('x');

        assert!(service.refresh_access_token(&token).is_err());
    }

    #[test]
    fn test_refresh_token_ttl_matches_config() {
        assert_eq!(create_test_jwt_service().refresh_token_ttl(), 86400);
    }

    #[test]
    fn test_token_error_display() {
        assert_eq!(TokenError::TokenExpired.to_string(), "Token has expired");
        assert_eq!(
            TokenError::InvalidTokenType("refresh".to_string()).to_string(),
            "Invalid token type, expected: refresh"
        );
    }
}
