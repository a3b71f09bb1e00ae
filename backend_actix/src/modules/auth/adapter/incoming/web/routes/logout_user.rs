use crate::api::schemas::{ErrorResponse, MessageResponse};
use crate::auth::application::use_cases::{
    logout_user::LogoutError, refresh_token::RefreshTokenRequest,
};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{delete, web, Responder};
use tracing::{error, info, warn};

use super::refresh_token::RefreshTokenRequestDto;

/// Logout
///
/// Revokes the refresh token so it can no longer mint access tokens.
#[utoipa::path(
    delete,
    path = "/authentications",
    tag = "auth",
    request_body = RefreshTokenRequestDto,
    responses(
        (
            status = 200,
            description = "Refresh token revoked",
            body = MessageResponse,
            example = json!({
                "status": "success",
                "message": "Refresh token revoked"
            })
        ),
        (
            status = 400,
            description = "Refresh token missing or not registered",
            body = ErrorResponse,
            example = json!({
                "status": "fail",
                "message": "Refresh token is not registered"
            })
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[delete("/authentications")]
pub async fn logout_user_handler(
    req: web::Json<RefreshTokenRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let request = match RefreshTokenRequest::new(req.into_inner().refresh_token) {
        Ok(request) => request,
        Err(e) => return ApiResponse::bad_request(&e.to_string()),
    };

    match data.logout_user_use_case.execute(request).await {
        Ok(()) => {
            info!("Refresh token revoked");
            ApiResponse::success_message("Refresh token revoked")
        }
        Err(LogoutError::TokenNotRegistered) => {
            warn!("Logout with unknown refresh token");
            ApiResponse::bad_request("Refresh token is not registered")
        }
        Err(e @ LogoutError::DatabaseError(_)) => {
            error!(error = %e, "Logout failed");
            ApiResponse::internal_error()
        }
    }
}
