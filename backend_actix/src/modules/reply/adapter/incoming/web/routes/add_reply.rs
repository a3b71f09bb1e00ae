use actix_web::{post, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    auth::adapter::incoming::web::extractors::AuthenticatedUser,
    reply::application::{domain::entities::AddedReply, ports::incoming::use_cases::AddReplyError},
    shared::api::ApiResponse,
    AppState,
};

#[derive(Debug, Deserialize, ToSchema)]
pub struct AddReplyRequest {
    #[schema(example = "Sebuah balasan")]
    pub content: String,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddReplyResponse {
    pub added_reply: AddedReply,
}

/// Reply to a comment
#[utoipa::path(
    post,
    path = "/threads/{thread_id}/comments/{comment_id}/replies",
    tag = "replies",
    params(
        ("thread_id" = Uuid, Path, description = "Thread id"),
        ("comment_id" = Uuid, Path, description = "Comment id"),
    ),
    request_body = AddReplyRequest,
    security(("bearer_auth" = [])),
    responses(
        (
            status = 201,
            description = "Reply created",
            body = inline(SuccessResponse<AddReplyResponse>),
            example = json!({
                "status": "success",
                "data": {
                    "addedReply": {
                        "id": "d2b7c0a4-5e61-4f3a-9c2d-8e1f0a3b4c56",
                        "content": "Sebuah balasan",
                        "owner": "5c1d8b2a-7e44-4d8b-8f0e-2b6a7c9d1e23"
                    }
                }
            })
        ),
        (status = 400, description = "Missing or empty content", body = ErrorResponse),
        (status = 401, description = "Missing or invalid access token", body = ErrorResponse),
        (status = 404, description = "Thread or comment not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/threads/{thread_id}/comments/{comment_id}/replies")]
pub async fn add_reply_handler(
    user: AuthenticatedUser,
    path: web::Path<(Uuid, Uuid)>,
    req: web::Json<AddReplyRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let (thread_id, comment_id) = path.into_inner();

    match data
        .add_reply_use_case
        .execute(user.user_id, thread_id, comment_id, req.into_inner().content)
        .await
    {
        Ok(added_reply) => {
            info!(%comment_id, reply_id = %added_reply.id, "Reply added");
            ApiResponse::created(AddReplyResponse { added_reply })
        }
        Err(err) => map_add_reply_error(err),
    }
}

fn map_add_reply_error(err: AddReplyError) -> HttpResponse {
    match err {
        AddReplyError::InvalidPayload(reason) => {
            warn!(error = %reason, "Rejected reply payload");
            ApiResponse::bad_request(&reason.to_string())
        }
        AddReplyError::NotFound(resource) => ApiResponse::not_found(&resource.not_found_message()),
        AddReplyError::Invariant(detail) => {
            warn!(%detail, "Reply insert violated a constraint");
            ApiResponse::bad_request("Reply could not be created")
        }
        AddReplyError::RepositoryError(detail) => {
            error!(%detail, "Reply insert failed");
            ApiResponse::internal_error()
        }
    }
}
