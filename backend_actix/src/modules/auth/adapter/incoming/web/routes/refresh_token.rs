use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::use_cases::refresh_token::{
    RefreshTokenError, RefreshTokenRequest,
};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{put, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;

/// Body for `PUT` and `DELETE /authentications`
#[derive(Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RefreshTokenRequestDto {
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    pub refresh_token: String,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RefreshTokenResponseBody {
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    access_token: String,
}

fn map_refresh_error(err: RefreshTokenError) -> HttpResponse {
    match err {
        RefreshTokenError::TokenExpired
        | RefreshTokenError::TokenInvalid
        | RefreshTokenError::InvalidTokenType
        | RefreshTokenError::TokenNotRegistered => {
            warn!(error = %err, "Refresh rejected");
            ApiResponse::bad_request(&err.to_string())
        }
        RefreshTokenError::TokenGenerationFailed(_) | RefreshTokenError::RepositoryError(_) => {
            error!(error = %err, "Refresh failed");
            ApiResponse::internal_error()
        }
    }
}

/// Refresh access token
#[utoipa::path(
    put,
    path = "/authentications",
    tag = "auth",
    request_body = RefreshTokenRequestDto,
    responses(
        (
            status = 200,
            description = "New access token issued",
            body = inline(SuccessResponse<RefreshTokenResponseBody>),
            example = json!({
                "status": "success",
                "data": { "accessToken": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9..." }
            })
        ),
        (
            status = 400,
            description = "Refresh token invalid, expired or revoked",
            body = ErrorResponse,
            example = json!({
                "status": "fail",
                "message": "Refresh token is not registered"
            })
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[put("/authentications")]
pub async fn refresh_token_handler(
    req: web::Json<RefreshTokenRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let request = match RefreshTokenRequest::new(req.into_inner().refresh_token) {
        Ok(request) => request,
        Err(e) => return ApiResponse::bad_request(&e.to_string()),
    };

    match data.refresh_token_use_case.execute(request).await {
        Ok(response) => {
            info!("Access token refreshed");
            ApiResponse::success(RefreshTokenResponseBody {
                access_token: response.access_token,
            })
        }
        Err(e) => map_refresh_error(e),
    }
}
