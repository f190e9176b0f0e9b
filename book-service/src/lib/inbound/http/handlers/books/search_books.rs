use axum::extract::Query;
use axum::extract::State;
use axum::http::StatusCode;
use serde::Deserialize;

use super::BookData;
use crate::domain::book::ports::BookServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

#[derive(Debug, Clone, Deserialize)]
pub struct SearchBooksQuery {
    genre: Option<String>,
}

pub async fn search_books(
    State(state): State<AppState>,
    Query(query): Query<SearchBooksQuery>,
) -> Result<ApiSuccess<Vec<BookData>>, ApiError> {
    let genre = query
        .genre
        .filter(|genre| !genre.is_empty())
        .ok_or_else(|| ApiError::BadRequest("Genre query parameter is required".to_string()))?;

    // No matches is an empty list, not an error
    state
        .book_service
        .search_by_genre(&genre)
        .await
        .map_err(ApiError::from)
        .map(|books| {
            ApiSuccess::new(
                StatusCode::OK,
                books.iter().map(BookData::from).collect(),
            )
        })
}
