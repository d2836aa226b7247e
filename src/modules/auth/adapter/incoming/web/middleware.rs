use std::sync::Arc;

use actix_web::{
    body::{BoxBody, MessageBody},
    dev::{ServiceRequest, ServiceResponse},
    middleware::Next,
    web, Error, HttpMessage,
};
use tracing::{error, warn};

use super::extractors::auth::{extract_bearer_token, AuthenticatedAdmin};
use crate::auth::application::ports::incoming::use_cases::ResolveAdminError;
use crate::auth::application::ports::outgoing::token_provider::TokenProvider;
use crate::shared::api::ApiResponse;
use crate::AppState;

pub const NO_TOKEN_MESSAGE: &str = "Unauthorized, no token.";
pub const INVALID_TOKEN_MESSAGE: &str = "Unauthorized, invalid token";

/// Gate for every admin route except login. Handlers behind it can take an
/// [`AuthenticatedAdmin`] argument.
pub async fn protect(
    req: ServiceRequest,
    next: Next<impl MessageBody + 'static>,
) -> Result<ServiceResponse<BoxBody>, Error> {
    let Some(token) = extract_bearer_token(req.request()) else {
        warn!(path = %req.path(), "Rejected admin request without bearer token");
        return Ok(req.into_response(ApiResponse::unauthorized(NO_TOKEN_MESSAGE)));
    };

    let (Some(tokens), Some(state)) = (
        req.app_data::<web::Data<Arc<dyn TokenProvider + Send + Sync>>>()
            .cloned(),
        req.app_data::<web::Data<AppState>>().cloned(),
    ) else {
        error!("Auth gate is missing its token provider or application state");
        return Ok(req.into_response(ApiResponse::server_error("Server Error")));
    };

    let claims = match tokens.verify_token(&token) {
        Ok(claims) => claims,
        Err(e) => {
            warn!(path = %req.path(), reason = %e, "Rejected admin request with invalid token");
            return Ok(req.into_response(ApiResponse::unauthorized(INVALID_TOKEN_MESSAGE)));
        }
    };

    match state.auth.resolve_admin.execute(claims.sub).await {
        Ok(profile) => {
            req.extensions_mut()
                .insert(AuthenticatedAdmin::from(profile));
            next.call(req)
                .await
                .map(ServiceResponse::map_into_boxed_body)
        }
        Err(ResolveAdminError::NotFound) => {
            warn!(admin_id = %claims.sub, "Rejected token for an administrator that no longer exists");
            Ok(req.into_response(ApiResponse::unauthorized(INVALID_TOKEN_MESSAGE)))
        }
        Err(ResolveAdminError::QueryError(e)) => {
            error!(error = %e, "Failed to resolve administrator from token");
            Ok(req.into_response(ApiResponse::server_error("Server Error")))
        }
    }
}
