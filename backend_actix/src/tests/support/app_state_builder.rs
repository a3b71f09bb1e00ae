use std::sync::Arc;

use actix_web::web;

use crate::auth::application::use_cases::{
    create_user::ICreateUserUseCase, login_user::ILoginUserUseCase, logout_user::ILogoutUseCase,
    refresh_token::IRefreshTokenUseCase,
};
use crate::comment::application::ports::incoming::use_cases::{
    AddCommentUseCase, DeleteCommentUseCase,
};
use crate::reply::application::ports::incoming::use_cases::{AddReplyUseCase, DeleteReplyUseCase};
use crate::tests::support::stubs::*;
use crate::thread::application::ports::incoming::use_cases::{
    AddThreadUseCase, GetThreadDetailUseCase,
};
use crate::AppState;

/// Every use case starts as a stub that panics when called; tests swap in
/// the one their route needs.
pub struct TestAppStateBuilder {
    create_user: Arc<dyn ICreateUserUseCase + Send + Sync>,
    login_user: Arc<dyn ILoginUserUseCase + Send + Sync>,
    refresh_token: Arc<dyn IRefreshTokenUseCase + Send + Sync>,
    logout_user: Arc<dyn ILogoutUseCase + Send + Sync>,
    add_thread: Arc<dyn AddThreadUseCase + Send + Sync>,
    get_thread_detail: Arc<dyn GetThreadDetailUseCase + Send + Sync>,
    add_comment: Arc<dyn AddCommentUseCase + Send + Sync>,
    delete_comment: Arc<dyn DeleteCommentUseCase + Send + Sync>,
    add_reply: Arc<dyn AddReplyUseCase + Send + Sync>,
    delete_reply: Arc<dyn DeleteReplyUseCase + Send + Sync>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            create_user: Arc::new(StubCreateUserUseCase),
            login_user: Arc::new(StubLoginUserUseCase),
            refresh_token: Arc::new(StubRefreshTokenUseCase),
            logout_user: Arc::new(StubLogoutUserUseCase),
            add_thread: Arc::new(StubAddThreadUseCase),
            get_thread_detail: Arc::new(StubGetThreadDetailUseCase),
            add_comment: Arc::new(StubAddCommentUseCase),
            delete_comment: Arc::new(StubDeleteCommentUseCase),
            add_reply: Arc::new(StubAddReplyUseCase),
            delete_reply: Arc::new(StubDeleteReplyUseCase),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_create_user(mut self, uc: impl ICreateUserUseCase + 'static) -> Self {
        self.create_user = Arc::new(uc);
        self
    }

    pub fn with_login_user(mut self, uc: impl ILoginUserUseCase + 'static) -> Self {
        self.login_user = Arc::new(uc);
        self
    }

    pub fn with_refresh_token(mut self, uc: impl IRefreshTokenUseCase + 'static) -> Self {
        self.refresh_token = Arc::new(uc);
        self
    }

    pub fn with_logout_user(mut self, uc: impl ILogoutUseCase + 'static) -> Self {
        self.logout_user = Arc::new(uc);
        self
    }

    pub fn with_add_thread(mut self, uc: impl AddThreadUseCase + 'static) -> Self {
        self.add_thread = Arc::new(uc);
        self
    }

    pub fn with_get_thread_detail(mut self, uc: impl GetThreadDetailUseCase + 'static) -> Self {
        self.get_thread_detail = Arc::new(uc);
        self
    }

    pub fn with_add_comment(mut self, uc: impl AddCommentUseCase + 'static) -> Self {
        self.add_comment = Arc::new(uc);
        self
    }

    pub fn with_delete_comment(mut self, uc: impl DeleteCommentUseCase + 'static) -> Self {
        self.delete_comment = Arc::new(uc);
        self
    }

    pub fn with_add_reply(mut self, uc: impl AddReplyUseCase + 'static) -> Self {
        self.add_reply = Arc::new(uc);
        self
    }

    pub fn with_delete_reply(mut self, uc: impl DeleteReplyUseCase + 'static) -> Self {
        self.delete_reply = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            create_user_use_case: self.create_user,
            login_user_use_case: self.login_user,
            refresh_token_use_case: self.refresh_token,
            logout_user_use_case: self.logout_user,
            add_thread_use_case: self.add_thread,
            get_thread_detail_use_case: self.get_thread_detail,
            add_comment_use_case: self.add_comment,
            delete_comment_use_case: self.delete_comment,
            add_reply_use_case: self.add_reply,
            delete_reply_use_case: self.delete_reply,
        })
    }
}
