use std::sync::Arc;
use std::time::Duration;

use auth::Authenticator;
use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::http::StatusCode;
use axum::middleware;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::routing::post;
use axum::Json;
use axum::Router;
use serde_json::json;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::auth::login::login;
use super::handlers::auth::register::register;
use super::handlers::books::add_book::add_book;
use super::handlers::books::delete_book::delete_book;
use super::handlers::books::get_book::get_book;
use super::handlers::books::list_books::list_books;
use super::handlers::books::search_books::search_books;
use super::handlers::books::update_book::update_book;
use super::middleware::authenticate as auth_middleware;
use crate::domain::book::service::BookService;
use crate::domain::user::service::UserService;
use crate::outbound::repositories::book::JsonBookRepository;
use crate::outbound::repositories::user::JsonUserRepository;

#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<UserService<JsonUserRepository>>,
    pub book_service: Arc<BookService<JsonBookRepository>>,
    pub authenticator: Arc<Authenticator>,
}

pub fn create_router(
    user_service: Arc<UserService<JsonUserRepository>>,
    book_service: Arc<BookService<JsonBookRepository>>,
    authenticator: Arc<Authenticator>,
) -> Router {
    let state = AppState {
        user_service,
        book_service,
        authenticator,
    };

    let public_routes = Router::new()
        .route("/api/auth/register", post(register))
        .route("/api/auth/login", post(login));

    // The authorization gate only wraps book routes; the static /search
    // segment takes precedence over the :id parameter.
    let protected_routes = Router::new()
        .route("/api/books", get(list_books).post(add_book))
        .route("/api/books/search", get(search_books))
        .route(
            "/api/books/:id",
            get(get_book).put(update_book).delete(delete_book),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .fallback(route_not_found)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn route_not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "status": 404,
            "message": "Route not found",
        })),
    )
}
