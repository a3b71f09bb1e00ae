use crate::api::schemas::{ErrorResponse, MessageResponse};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

use crate::auth::adapter::incoming::web::routes::{
    CreateUserRequest, LoginRequestDto, LoginResponse, RefreshTokenRequestDto,
    RefreshTokenResponseBody, RegisterUserResponse, RegisteredUser,
};
use crate::comment::adapter::incoming::web::routes::{
    AddCommentRequest, AddCommentResponse, DeleteCommentResponse,
};
use crate::comment::application::domain::entities::{AddedComment, DeletedComment};
use crate::reply::adapter::incoming::web::routes::{
    AddReplyRequest, AddReplyResponse, DeleteReplyResponse,
};
use crate::reply::application::domain::entities::{AddedReply, DeletedReply};
use crate::thread::adapter::incoming::web::routes::{
    AddThreadRequest, AddThreadResponse, GetThreadDetailResponse,
};
use crate::thread::application::domain::entities::{
    AddedThread, CommentDetail, ReplyDetail, ThreadDetail,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Forum API",
        version = "1.0.0",
        description = "Threads, comments and replies with owner-only soft delete"
    ),
    paths(
        // Auth endpoints
        crate::auth::adapter::incoming::web::routes::register_user::register_user_handler,
        crate::auth::adapter::incoming::web::routes::login_user::login_user_handler,
        crate::auth::adapter::incoming::web::routes::refresh_token::refresh_token_handler,
        crate::auth::adapter::incoming::web::routes::logout_user::logout_user_handler,

        // Thread endpoints
        crate::thread::adapter::incoming::web::routes::add_thread::add_thread_handler,
        crate::thread::adapter::incoming::web::routes::get_thread_detail::get_thread_detail_handler,

        // Comment endpoints
        crate::comment::adapter::incoming::web::routes::add_comment::add_comment_handler,
        crate::comment::adapter::incoming::web::routes::delete_comment::delete_comment_handler,

        // Reply endpoints
        crate::reply::adapter::incoming::web::routes::add_reply::add_reply_handler,
        crate::reply::adapter::incoming::web::routes::delete_reply::delete_reply_handler,
    ),
    components(
        schemas(
            // Response wrappers
            ErrorResponse,
            MessageResponse,

            // Auth DTOs
            CreateUserRequest,
            RegisterUserResponse,
            RegisteredUser,
            LoginRequestDto,
            LoginResponse,
            RefreshTokenRequestDto,
            RefreshTokenResponseBody,

            // Forum DTOs
            AddThreadRequest,
            AddThreadResponse,
            AddedThread,
            GetThreadDetailResponse,
            ThreadDetail,
            CommentDetail,
            ReplyDetail,
            AddCommentRequest,
            AddCommentResponse,
            AddedComment,
            DeleteCommentResponse,
            DeletedComment,
            AddReplyRequest,
            AddReplyResponse,
            AddedReply,
            DeleteReplyResponse,
            DeletedReply,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "users", description = "User registration"),
        (name = "auth", description = "Access and refresh tokens"),
        (name = "threads", description = "Threads and thread detail"),
        (name = "comments", description = "Comments on threads"),
        (name = "replies", description = "Replies to comments"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Access token from POST /authentications"))
                        .build(),
                ),
            )
        }
    }
}
