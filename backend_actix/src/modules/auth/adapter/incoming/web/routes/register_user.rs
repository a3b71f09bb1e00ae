use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::application::use_cases::create_user::CreateUserError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;

/// Request body for user registration
#[derive(Serialize, Deserialize, ToSchema)]
pub struct CreateUserRequest {
    /// Letters, digits and underscores, at most 50 characters
    #[schema(example = "dicoding")]
    pub username: String,

    #[schema(example = "secret")]
    pub password: String,

    /// Display name
    #[schema(example = "Dicoding Indonesia")]
    pub fullname: String,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterUserResponse {
    added_user: RegisteredUser,
}

#[derive(Serialize, ToSchema)]
pub struct RegisteredUser {
    #[schema(example = "123e4567-e89b-12d3-a456-426614174000")]
    id: String,

    #[schema(example = "dicoding")]
    username: String,

    #[schema(example = "Dicoding Indonesia")]
    fullname: String,
}

fn map_create_user_error(err: CreateUserError, req: &CreateUserRequest) -> HttpResponse {
    match &err {
        CreateUserError::InvalidInput(reason) => {
            warn!(username = %req.username, error = %reason, "Invalid registration input");
            ApiResponse::bad_request(&reason.to_string())
        }

        CreateUserError::UsernameAlreadyExists => {
            warn!(username = %req.username, "Username already taken");
            ApiResponse::bad_request("Username is already taken")
        }

        CreateUserError::HashingFailed(_) | CreateUserError::RepositoryError(_) => {
            error!(username = %req.username, error = %err, "User registration failed");
            ApiResponse::internal_error()
        }
    }
}

/// Register a new user
#[utoipa::path(
    post,
    path = "/users",
    tag = "users",
    request_body = CreateUserRequest,
    responses(
        (
            status = 201,
            description = "User created",
            body = inline(SuccessResponse<RegisterUserResponse>),
            example = json!({
                "status": "success",
                "data": {
                    "addedUser": {
                        "id": "123e4567-e89b-12d3-a456-426614174000",
                        "username": "dicoding",
                        "fullname": "Dicoding Indonesia"
                    }
                }
            })
        ),
        (
            status = 400,
            description = "Invalid payload or username taken",
            body = ErrorResponse,
            example = json!({
                "status": "fail",
                "message": "Username is already taken"
            })
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/users")]
pub async fn register_user_handler(
    req: web::Json<CreateUserRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    info!(username = %req.username, "User registration attempt");

    let result = data
        .create_user_use_case
        .execute(
            req.username.clone(),
            req.password.clone(),
            req.fullname.clone(),
        )
        .await;

    match result {
        Ok(user) => {
            info!(user_id = %user.id, username = %user.username, "User registered");

            ApiResponse::created(RegisterUserResponse {
                added_user: RegisteredUser {
                    id: user.id.to_string(),
                    username: user.username,
                    fullname: user.full_name,
                },
            })
        }
        Err(e) => map_create_user_error(e, &req),
    }
}
