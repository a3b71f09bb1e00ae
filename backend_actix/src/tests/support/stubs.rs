use std::sync::Arc;

use actix_web::web;
use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::{User, UserId};
use crate::auth::application::ports::outgoing::token_provider::{
    TokenClaims, TokenError, TokenProvider, ACCESS_TOKEN, REFRESH_TOKEN,
};
use crate::auth::application::use_cases::{
    create_user::{CreateUserError, ICreateUserUseCase},
    login_user::{ILoginUserUseCase, LoginError, LoginRequest, LoginUserResponse},
    logout_user::{ILogoutUseCase, LogoutError},
    refresh_token::{
        IRefreshTokenUseCase, RefreshTokenError, RefreshTokenRequest, RefreshTokenResponse,
    },
};
use crate::comment::application::domain::entities::{AddedComment, DeletedComment};
use crate::comment::application::ports::incoming::use_cases::{
    AddCommentError, AddCommentUseCase, DeleteCommentError, DeleteCommentUseCase,
};
use crate::reply::application::domain::entities::{AddedReply, DeletedReply};
use crate::reply::application::ports::incoming::use_cases::{
    AddReplyError, AddReplyUseCase, DeleteReplyError, DeleteReplyUseCase,
};
use crate::thread::application::domain::entities::{AddedThread, ThreadDetail};
use crate::thread::application::ports::incoming::use_cases::{
    AddThreadError, AddThreadUseCase, GetThreadDetailError, GetThreadDetailUseCase,
};

// ============================================================
// Token provider
// ============================================================

/// Accepts any bearer string and answers with fixed claims.
#[derive(Clone)]
pub struct StubTokenProvider {
    claims: Option<(Uuid, &'static str)>,
}

impl StubTokenProvider {
    pub fn access(user_id: Uuid) -> Self {
        Self {
            claims: Some((user_id, ACCESS_TOKEN)),
        }
    }

    pub fn refresh(user_id: Uuid) -> Self {
        Self {
            claims: Some((user_id, REFRESH_TOKEN)),
        }
    }

    pub fn rejecting() -> Self {
        Self { claims: None }
    }

    /// App data in the shape the `AuthenticatedUser` extractor looks up.
    pub fn into_app_data(self) -> web::Data<Arc<dyn TokenProvider + Send + Sync>> {
        let provider: Arc<dyn TokenProvider + Send + Sync> = Arc::new(self);
        web::Data::new(provider)
    }
}

impl TokenProvider for StubTokenProvider {
    fn generate_access_token(&self, _user_id: Uuid) -> Result<String, TokenError> {
        unimplemented!("Not used in route tests")
    }

    fn generate_refresh_token(&self, _user_id: Uuid) -> Result<String, TokenError> {
        unimplemented!("Not used in route tests")
    }

    fn verify_token(&self, _token: &str) -> Result<TokenClaims, TokenError> {
        let (sub, token_type) = self.claims.ok_or(TokenError::InvalidSignature)?;
        Ok(TokenClaims {
            sub,
            exp: 9_999_999_999,
            iat: 0,
            nbf: 0,
            token_type: token_type.to_string(),
        })
    }

    fn refresh_access_token(&self, _refresh_token: &str) -> Result<String, TokenError> {
        unimplemented!("Not used in route tests")
    }

    fn refresh_token_ttl(&self) -> i64 {
        3600
    }
}

pub fn bearer() -> (&'static str, &'static str) {
    ("Authorization", "Bearer test-token")
}

// ============================================================
// Auth use cases
// ============================================================

#[derive(Default, Clone)]
pub struct StubCreateUserUseCase;

#[async_trait]
impl ICreateUserUseCase for StubCreateUserUseCase {
    async fn execute(
        &self,
        _username: String,
        _password: String,
        _full_name: String,
    ) -> Result<User, CreateUserError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubLoginUserUseCase;

#[async_trait]
impl ILoginUserUseCase for StubLoginUserUseCase {
    async fn execute(&self, _request: LoginRequest) -> Result<LoginUserResponse, LoginError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubRefreshTokenUseCase;

#[async_trait]
impl IRefreshTokenUseCase for StubRefreshTokenUseCase {
    async fn execute(
        &self,
        _request: RefreshTokenRequest,
    ) -> Result<RefreshTokenResponse, RefreshTokenError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubLogoutUserUseCase;

#[async_trait]
impl ILogoutUseCase for StubLogoutUserUseCase {
    async fn execute(&self, _request: RefreshTokenRequest) -> Result<(), LogoutError> {
        unimplemented!("Not used in this test")
    }
}

// ============================================================
// Forum use cases
// ============================================================

#[derive(Default, Clone)]
pub struct StubAddThreadUseCase;

#[async_trait]
impl AddThreadUseCase for StubAddThreadUseCase {
    async fn execute(
        &self,
        _owner: UserId,
        _title: String,
        _body: String,
    ) -> Result<AddedThread, AddThreadError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubGetThreadDetailUseCase;

#[async_trait]
impl GetThreadDetailUseCase for StubGetThreadDetailUseCase {
    async fn execute(&self, _thread_id: Uuid) -> Result<ThreadDetail, GetThreadDetailError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubAddCommentUseCase;

#[async_trait]
impl AddCommentUseCase for StubAddCommentUseCase {
    async fn execute(
        &self,
        _owner: UserId,
        _thread_id: Uuid,
        _content: String,
    ) -> Result<AddedComment, AddCommentError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubDeleteCommentUseCase;

#[async_trait]
impl DeleteCommentUseCase for StubDeleteCommentUseCase {
    async fn execute(
        &self,
        _owner: UserId,
        _thread_id: Uuid,
        _comment_id: Uuid,
    ) -> Result<DeletedComment, DeleteCommentError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubAddReplyUseCase;

#[async_trait]
impl AddReplyUseCase for StubAddReplyUseCase {
    async fn execute(
        &self,
        _owner: UserId,
        _thread_id: Uuid,
        _comment_id: Uuid,
        _content: String,
    ) -> Result<AddedReply, AddReplyError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubDeleteReplyUseCase;

#[async_trait]
impl DeleteReplyUseCase for StubDeleteReplyUseCase {
    async fn execute(
        &self,
        _owner: UserId,
        _thread_id: Uuid,
        _comment_id: Uuid,
        _reply_id: Uuid,
    ) -> Result<DeletedReply, DeleteReplyError> {
        unimplemented!("Not used in this test")
    }
}
