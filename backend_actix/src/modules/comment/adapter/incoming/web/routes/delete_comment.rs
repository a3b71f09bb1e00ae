use actix_web::{delete, web, HttpResponse, Responder};
use serde::Serialize;
use tracing::{error, info, warn};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    auth::{
        adapter::incoming::web::extractors::AuthenticatedUser,
        application::domain::entities::UserId,
    },
    comment::application::{
        domain::entities::DeletedComment, ports::incoming::use_cases::DeleteCommentError,
    },
    shared::api::ApiResponse,
    AppState,
};

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeleteCommentResponse {
    pub deleted_comment: DeletedComment,
}

/// Delete a comment
///
/// Soft delete. Only the comment's owner may delete it; the comment stays in
/// the thread detail as `[comment deleted]`.
#[utoipa::path(
    delete,
    path = "/threads/{thread_id}/comments/{comment_id}",
    tag = "comments",
    params(
        ("thread_id" = Uuid, Path, description = "Thread id"),
        ("comment_id" = Uuid, Path, description = "Comment id"),
    ),
    security(("bearer_auth" = [])),
    responses(
        (
            status = 200,
            description = "Comment deleted",
            body = inline(SuccessResponse<DeleteCommentResponse>),
            example = json!({
                "status": "success",
                "data": {
                    "deletedComment": {
                        "isDeleted": true,
                        "deletedAt": "2024-03-09T08:00:00Z"
                    }
                }
            })
        ),
        (status = 401, description = "Missing or invalid access token", body = ErrorResponse),
        (
            status = 403,
            description = "Caller does not own the comment",
            body = ErrorResponse,
            example = json!({
                "status": "fail",
                "message": "You are not the owner of this comment"
            })
        ),
        (status = 404, description = "Thread or comment not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[delete("/threads/{thread_id}/comments/{comment_id}")]
pub async fn delete_comment_handler(
    user: AuthenticatedUser,
    path: web::Path<(Uuid, Uuid)>,
    data: web::Data<AppState>,
) -> impl Responder {
    let (thread_id, comment_id) = path.into_inner();

    match data
        .delete_comment_use_case
        .execute(user.user_id, thread_id, comment_id)
        .await
    {
        Ok(deleted_comment) => {
            info!(%thread_id, %comment_id, "Comment deleted");
            ApiResponse::success(DeleteCommentResponse { deleted_comment })
        }
        Err(err) => map_delete_comment_error(err, user.user_id, comment_id),
    }
}

fn map_delete_comment_error(
    err: DeleteCommentError,
    actor: UserId,
    comment_id: Uuid,
) -> HttpResponse {
    match err {
        DeleteCommentError::NotFound(resource) => {
            ApiResponse::not_found(&resource.not_found_message())
        }
        DeleteCommentError::Forbidden => {
            warn!(%actor, %comment_id, "Comment delete forbidden");
            ApiResponse::forbidden("You are not the owner of this comment")
        }
        DeleteCommentError::RepositoryError(detail) => {
            error!(%comment_id, %detail, "Comment delete failed");
            ApiResponse::internal_error()
        }
    }
}
