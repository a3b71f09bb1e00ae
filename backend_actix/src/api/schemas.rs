// src/api/schemas.rs
use serde::Serialize;
use utoipa::ToSchema;

/// Standard success response wrapper
#[derive(Serialize, ToSchema)]
#[serde(bound = "T: Serialize")]
pub struct SuccessResponse<T> {
    /// Always `success` for 2xx responses
    #[schema(example = "success")]
    pub status: String,
    /// Response data
    pub data: T,
}

/// Standard error response wrapper
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    /// `fail` for client errors, `error` for server errors
    #[schema(example = "fail")]
    pub status: String,

    /// Human-readable error message
    #[schema(example = "Thread not found")]
    pub message: String,
}

/// Success response that carries only a message
#[derive(Serialize, ToSchema)]
pub struct MessageResponse {
    #[schema(example = "success")]
    pub status: String,

    #[schema(example = "Refresh token revoked")]
    pub message: String,
}
