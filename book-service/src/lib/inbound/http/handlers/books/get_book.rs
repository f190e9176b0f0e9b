use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use super::BookData;
use crate::domain::book::models::BookId;
use crate::domain::book::ports::BookServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn get_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<ApiSuccess<BookData>, ApiError> {
    // A malformed id cannot match any record, so it reads as absent
    let book_id =
        BookId::from_string(&id).map_err(|_| ApiError::NotFound("Book not found".to_string()))?;

    state
        .book_service
        .get_book(&book_id)
        .await
        .map_err(ApiError::from)
        .map(|ref book| ApiSuccess::new(StatusCode::OK, book.into()))
}
