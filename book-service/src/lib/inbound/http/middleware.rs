use axum::extract::Request;
use axum::extract::State;
use axum::http::header;
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;

use crate::domain::user::models::UserId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;

/// Extension type carrying the authenticated identity into handlers,
/// which pass it on to the domain services as an explicit requester.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
}

/// Authorization gate for book routes.
///
/// Verifies the bearer token and attaches the user id to the request; any
/// failure short-circuits with the same 401 body and never reaches the
/// downstream handler.
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    let token = extract_token_from_header(&req)?;

    let claims = state.authenticator.validate_token(token).map_err(|e| {
        tracing::warn!(error = %e, "Token validation failed");
        unauthenticated()
    })?;

    let user_id = UserId::from_string(&claims.sub).map_err(|e| {
        tracing::warn!(error = %e, "Token subject is not a valid user id");
        unauthenticated()
    })?;

    req.extensions_mut().insert(AuthenticatedUser { user_id });

    Ok(next.run(req).await)
}

fn extract_token_from_header(req: &Request) -> Result<&str, Response> {
    let auth_header = req
        .headers()
        .get(header::AUTHORIZATION)
        .ok_or_else(unauthenticated)?;

    let auth_str = auth_header.to_str().map_err(|_| unauthenticated())?;

    auth_str
        .strip_prefix("Bearer ")
        .ok_or_else(unauthenticated)
}

fn unauthenticated() -> Response {
    ApiError::Unauthorized("Please authenticate".to_string()).into_response()
}
