use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::use_cases::login_user::{LoginError, LoginRequest};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;

/// Login request from client
#[derive(Serialize, Deserialize, ToSchema)]
pub struct LoginRequestDto {
    #[schema(example = "dicoding")]
    pub username: String,

    #[schema(example = "secret")]
    pub password: String,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    /// Short-lived JWT for the `Authorization: Bearer` header
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    access_token: String,

    /// Long-lived JWT for `PUT /authentications`
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    refresh_token: String,
}

fn map_login_error(err: LoginError, username: &str) -> HttpResponse {
    match err {
        LoginError::InvalidCredentials => {
            warn!(username = %username, "Login rejected: invalid credentials");
            ApiResponse::unauthorized("Invalid username or password")
        }
        other => {
            error!(username = %username, error = %other, "Login failed");
            ApiResponse::internal_error()
        }
    }
}

/// User login
///
/// Exchanges username and password for an access and a refresh token.
#[utoipa::path(
    post,
    path = "/authentications",
    tag = "auth",
    request_body = LoginRequestDto,
    responses(
        (
            status = 201,
            description = "Tokens issued",
            body = inline(SuccessResponse<LoginResponse>),
            example = json!({
                "status": "success",
                "data": {
                    "accessToken": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...",
                    "refreshToken": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9..."
                }
            })
        ),
        (status = 400, description = "Missing username or password", body = ErrorResponse),
        (
            status = 401,
            description = "Invalid credentials",
            body = ErrorResponse,
            example = json!({
                "status": "fail",
                "message": "Invalid username or password"
            })
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/authentications")]
pub async fn login_user_handler(
    req: web::Json<LoginRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();
    let username = dto.username.clone();

    info!(username = %username, "Login attempt");

    let request = match LoginRequest::new(dto.username, dto.password) {
        Ok(request) => request,
        Err(e) => {
            warn!(username = %username, error = %e, "Invalid login payload");
            return ApiResponse::bad_request(&e.to_string());
        }
    };

    match data.login_user_use_case.execute(request).await {
        Ok(tokens) => {
            info!(username = %username, "User logged in");
            ApiResponse::created(LoginResponse {
                access_token: tokens.access_token,
                refresh_token: tokens.refresh_token,
            })
        }
        Err(e) => map_login_error(e, &username),
    }
}
