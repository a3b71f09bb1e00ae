use actix_web::{get, web, HttpResponse, Responder};
use serde::Serialize;
use tracing::{debug, error};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    shared::{api::ApiResponse, ownership_gate::Resource},
    thread::application::{
        domain::entities::ThreadDetail, ports::incoming::use_cases::GetThreadDetailError,
    },
    AppState,
};

#[derive(Serialize, ToSchema)]
pub struct GetThreadDetailResponse {
    pub thread: ThreadDetail,
}

/// Thread detail
///
/// Public. Returns the thread with all its comments and their replies,
/// oldest first. Deleted comments and replies keep their place in the tree
/// with placeholder content.
#[utoipa::path(
    get,
    path = "/threads/{thread_id}",
    tag = "threads",
    params(("thread_id" = Uuid, Path, description = "Thread id")),
    responses(
        (
            status = 200,
            description = "Thread with comments and replies",
            body = inline(SuccessResponse<GetThreadDetailResponse>)
        ),
        (
            status = 404,
            description = "Thread not found",
            body = ErrorResponse,
            example = json!({ "status": "fail", "message": "Thread not found" })
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/threads/{thread_id}")]
pub async fn get_thread_detail_handler(
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let thread_id = path.into_inner();

    match data.get_thread_detail_use_case.execute(thread_id).await {
        Ok(thread) => ApiResponse::success(GetThreadDetailResponse { thread }),
        Err(err) => map_get_thread_detail_error(err, thread_id),
    }
}

fn map_get_thread_detail_error(err: GetThreadDetailError, thread_id: Uuid) -> HttpResponse {
    match err {
        GetThreadDetailError::ThreadNotFound => {
            debug!(%thread_id, "Thread not found");
            ApiResponse::not_found(&Resource::Thread.not_found_message())
        }
        GetThreadDetailError::RepositoryError(detail) => {
            error!(%thread_id, %detail, "Failed to load thread detail");
            ApiResponse::internal_error()
        }
    }
}
