use actix_web::{post, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;

use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    auth::adapter::incoming::web::extractors::AuthenticatedUser,
    shared::api::ApiResponse,
    thread::application::{
        domain::entities::AddedThread, ports::incoming::use_cases::AddThreadError,
    },
    AppState,
};

#[derive(Debug, Deserialize, ToSchema)]
pub struct AddThreadRequest {
    #[schema(example = "Belajar Rust")]
    pub title: String,
    #[schema(example = "Bagaimana cara kerja borrow checker?")]
    pub body: String,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddThreadResponse {
    pub added_thread: AddedThread,
}

/// Create a thread
#[utoipa::path(
    post,
    path = "/threads",
    tag = "threads",
    request_body = AddThreadRequest,
    security(("bearer_auth" = [])),
    responses(
        (
            status = 201,
            description = "Thread created",
            body = inline(SuccessResponse<AddThreadResponse>),
            example = json!({
                "status": "success",
                "data": {
                    "addedThread": {
                        "id": "0b6f5f1e-3b39-4a5e-9d5b-1c3f7a2f4c10",
                        "title": "Belajar Rust",
                        "owner": "5c1d8b2a-7e44-4d8b-8f0e-2b6a7c9d1e23"
                    }
                }
            })
        ),
        (status = 400, description = "Missing or invalid title/body", body = ErrorResponse),
        (status = 401, description = "Missing or invalid access token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/threads")]
pub async fn add_thread_handler(
    user: AuthenticatedUser,
    req: web::Json<AddThreadRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let AddThreadRequest { title, body } = req.into_inner();

    match data
        .add_thread_use_case
        .execute(user.user_id, title, body)
        .await
    {
        Ok(added_thread) => {
            info!(thread_id = %added_thread.id, owner = %added_thread.owner, "Thread created");
            ApiResponse::created(AddThreadResponse { added_thread })
        }
        Err(err) => map_add_thread_error(err),
    }
}

fn map_add_thread_error(err: AddThreadError) -> HttpResponse {
    match err {
        AddThreadError::InvalidPayload(reason) => {
            warn!(error = %reason, "Rejected thread payload");
            ApiResponse::bad_request(&reason.to_string())
        }
        AddThreadError::Invariant(detail) => {
            warn!(%detail, "Thread insert violated a constraint");
            ApiResponse::bad_request("Thread could not be created")
        }
        AddThreadError::RepositoryError(detail) => {
            error!(%detail, "Thread insert failed");
            ApiResponse::internal_error()
        }
    }
}
