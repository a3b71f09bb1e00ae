use actix_web::{post, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    auth::adapter::incoming::web::extractors::AuthenticatedUser,
    comment::application::{
        domain::entities::AddedComment, ports::incoming::use_cases::AddCommentError,
    },
    shared::api::ApiResponse,
    AppState,
};

#[derive(Debug, Deserialize, ToSchema)]
pub struct AddCommentRequest {
    #[schema(example = "Sebuah komentar")]
    pub content: String,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddCommentResponse {
    pub added_comment: AddedComment,
}

/// Comment on a thread
#[utoipa::path(
    post,
    path = "/threads/{thread_id}/comments",
    tag = "comments",
    params(("thread_id" = Uuid, Path, description = "Thread id")),
    request_body = AddCommentRequest,
    security(("bearer_auth" = [])),
    responses(
        (
            status = 201,
            description = "Comment created",
            body = inline(SuccessResponse<AddCommentResponse>),
            example = json!({
                "status": "success",
                "data": {
                    "addedComment": {
                        "id": "9a3e2d61-1c8f-4a0b-b5b8-6f2c4d7e8a90",
                        "content": "Sebuah komentar",
                        "owner": "5c1d8b2a-7e44-4d8b-8f0e-2b6a7c9d1e23"
                    }
                }
            })
        ),
        (status = 400, description = "Missing or empty content", body = ErrorResponse),
        (status = 401, description = "Missing or invalid access token", body = ErrorResponse),
        (status = 404, description = "Thread not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/threads/{thread_id}/comments")]
pub async fn add_comment_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    req: web::Json<AddCommentRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let thread_id = path.into_inner();

    match data
        .add_comment_use_case
        .execute(user.user_id, thread_id, req.into_inner().content)
        .await
    {
        Ok(added_comment) => {
            info!(%thread_id, comment_id = %added_comment.id, "Comment added");
            ApiResponse::created(AddCommentResponse { added_comment })
        }
        Err(err) => map_add_comment_error(err),
    }
}

fn map_add_comment_error(err: AddCommentError) -> HttpResponse {
    match err {
        AddCommentError::InvalidPayload(reason) => {
            warn!(error = %reason, "Rejected comment payload");
            ApiResponse::bad_request(&reason.to_string())
        }
        AddCommentError::NotFound(resource) => {
            ApiResponse::not_found(&resource.not_found_message())
        }
        AddCommentError::Invariant(detail) => {
            warn!(%detail, "Comment insert violated a constraint");
            ApiResponse::bad_request("Comment could not be created")
        }
        AddCommentError::RepositoryError(detail) => {
            error!(%detail, "Comment insert failed");
            ApiResponse::internal_error()
        }
    }
}
