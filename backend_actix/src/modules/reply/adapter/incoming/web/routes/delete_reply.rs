use actix_web::{delete, web, HttpResponse, Responder};
use serde::Serialize;
use tracing::{error, info, warn};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    auth::adapter::incoming::web::extractors::AuthenticatedUser,
    reply::application::{
        domain::entities::DeletedReply, ports::incoming::use_cases::DeleteReplyError,
    },
    shared::api::ApiResponse,
    AppState,
};

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeleteReplyResponse {
    pub deleted_reply: DeletedReply,
}

/// Delete a reply
#[utoipa::path(
    delete,
    path = "/threads/{thread_id}/comments/{comment_id}/replies/{reply_id}",
    tag = "replies",
    params(
        ("thread_id" = Uuid, Path, description = "Thread id"),
        ("comment_id" = Uuid, Path, description = "Comment id"),
        ("reply_id" = Uuid, Path, description = "Reply id"),
    ),
    security(("bearer_auth" = [])),
    responses(
        (
            status = 200,
            description = "Reply deleted",
            body = inline(SuccessResponse<DeleteReplyResponse>)
        ),
        (status = 401, description = "Missing or invalid access token", body = ErrorResponse),
        (status = 403, description = "Caller does not own the reply", body = ErrorResponse),
        (status = 404, description = "Thread, comment or reply not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[delete("/threads/{thread_id}/comments/{comment_id}/replies/{reply_id}")]
pub async fn delete_reply_handler(
    user: AuthenticatedUser,
    path: web::Path<(Uuid, Uuid, Uuid)>,
    data: web::Data<AppState>,
) -> impl Responder {
    let (thread_id, comment_id, reply_id) = path.into_inner();

    let result = data
        .delete_reply_use_case
        .execute(user.user_id, thread_id, comment_id, reply_id)
        .await;

    match result {
        Ok(deleted_reply) => {
            info!(%comment_id, %reply_id, "Reply deleted");
            ApiResponse::success(DeleteReplyResponse { deleted_reply })
        }
        Err(err) => map_delete_reply_error(err, reply_id),
    }
}

fn map_delete_reply_error(err: DeleteReplyError, reply_id: Uuid) -> HttpResponse {
    match err {
        DeleteReplyError::NotFound(resource) => {
            ApiResponse::not_found(&resource.not_found_message())
        }
        DeleteReplyError::Forbidden => {
            warn!(%reply_id, "Reply delete forbidden");
            ApiResponse::forbidden("You are not the owner of this reply")
        }
        DeleteReplyError::RepositoryError(detail) => {
            error!(%reply_id, %detail, "Reply delete failed");
            ApiResponse::internal_error()
        }
    }
}
