use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use super::BookData;
use crate::domain::book::models::BookId;
use crate::domain::book::ports::BookServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn delete_book(
    State(state): State<AppState>,
    Extension(requester): Extension<AuthenticatedUser>,
    Path(id): Path<String>,
) -> Result<ApiSuccess<BookData>, ApiError> {
    let book_id =
        BookId::from_string(&id).map_err(|_| ApiError::NotFound("Book not found".to_string()))?;

    // The removed record is echoed back to the caller
    state
        .book_service
        .delete_book(&book_id, &requester.user_id)
        .await
        .map_err(ApiError::from)
        .map(|ref book| ApiSuccess::new(StatusCode::OK, book.into()))
}
