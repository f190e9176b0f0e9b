use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use serde::Deserialize;

use super::BookData;
use crate::domain::book::models::CreateBookCommand;
use crate::domain::book::ports::BookServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiJson;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

/// HTTP request body for adding a book (raw JSON).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddBookRequest {
    title: Option<String>,
    author: Option<String>,
    genre: Option<String>,
    published_year: Option<i32>,
}

impl From<AddBookRequest> for CreateBookCommand {
    fn from(body: AddBookRequest) -> Self {
        Self {
            title: body.title,
            author: body.author,
            genre: body.genre,
            published_year: body.published_year,
        }
    }
}

pub async fn add_book(
    State(state): State<AppState>,
    Extension(requester): Extension<AuthenticatedUser>,
    ApiJson(body): ApiJson<AddBookRequest>,
) -> Result<ApiSuccess<BookData>, ApiError> {
    state
        .book_service
        .add_book(body.into(), &requester.user_id)
        .await
        .map_err(ApiError::from)
        .map(|ref book| ApiSuccess::new(StatusCode::CREATED, book.into()))
}
