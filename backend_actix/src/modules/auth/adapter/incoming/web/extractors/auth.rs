use actix_web::{dev::Payload, web, Error as ActixError, FromRequest, HttpRequest, HttpResponse};
use std::{
    future::{ready, Ready},
    sync::Arc,
};
use tracing::warn;

use crate::auth::application::domain::entities::UserId;
use crate::auth::application::ports::outgoing::token_provider::{TokenProvider, ACCESS_TOKEN};
use crate::shared::api::ApiResponse;

/// Actor resolved from a bearer access token.
#[derive(Debug, Clone, Copy)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
}

fn create_api_error(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

impl FromRequest for AuthenticatedUser {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(authenticate(req).map_err(create_api_error))
    }
}

fn authenticate(req: &HttpRequest) -> Result<AuthenticatedUser, HttpResponse> {
    let Some(token_provider) = req.app_data::<web::Data<Arc<dyn TokenProvider + Send + Sync>>>()
    else {
        tracing::error!("TokenProvider is not registered as app data");
        return Err(ApiResponse::internal_error());
    };

    let token = extract_token_from_header(req)
        .ok_or_else(|| ApiResponse::unauthorized("Missing authentication"))?;

    let claims = token_provider.verify_token(&token).map_err(|e| {
        warn!(error = %e, "Rejected bearer token");
        ApiResponse::unauthorized("Invalid or expired token")
    })?;

    if claims.token_type != ACCESS_TOKEN {
        warn!(token_type = %claims.token_type, "Non-access token used as bearer");
        return Err(ApiResponse::unauthorized("Invalid token type"));
    }

    Ok(AuthenticatedUser {
        user_id: UserId::from(claims.sub),
    })
}

fn extract_token_from_header(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get("Authorization")?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}
