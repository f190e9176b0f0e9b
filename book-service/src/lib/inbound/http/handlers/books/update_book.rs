use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use serde::Deserialize;

use super::BookData;
use crate::domain::book::models::BookId;
use crate::domain::book::models::UpdateBookCommand;
use crate::domain::book::ports::BookServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiJson;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

/// HTTP request body for updating a book: any subset of the fields,
/// merge semantics.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBookRequest {
    title: Option<String>,
    author: Option<String>,
    genre: Option<String>,
    published_year: Option<i32>,
}

impl From<UpdateBookRequest> for UpdateBookCommand {
    fn from(body: UpdateBookRequest) -> Self {
        Self {
            title: body.title,
            author: body.author,
            genre: body.genre,
            published_year: body.published_year,
        }
    }
}

pub async fn update_book(
    State(state): State<AppState>,
    Extension(requester): Extension<AuthenticatedUser>,
    Path(id): Path<String>,
    ApiJson(body): ApiJson<UpdateBookRequest>,
) -> Result<ApiSuccess<BookData>, ApiError> {
    let book_id =
        BookId::from_string(&id).map_err(|_| ApiError::NotFound("Book not found".to_string()))?;

    state
        .book_service
        .update_book(&book_id, body.into(), &requester.user_id)
        .await
        .map_err(ApiError::from)
        .map(|ref book| ApiSuccess::new(StatusCode::OK, book.into()))
}
