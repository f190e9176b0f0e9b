use axum::extract::Query;
use axum::extract::State;
use axum::http::StatusCode;
use serde::Deserialize;
use serde::Serialize;

use super::BookData;
use crate::domain::book::ports::BookServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

/// Paging parameters arrive as raw strings; anything that does not parse
/// to a positive integer silently falls back to the defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct ListBooksQuery {
    page: Option<String>,
    limit: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListBooksResponseData {
    pub total: usize,
    pub page: usize,
    pub limit: usize,
    pub books: Vec<BookData>,
}

pub async fn list_books(
    State(state): State<AppState>,
    Query(query): Query<ListBooksQuery>,
) -> Result<ApiSuccess<ListBooksResponseData>, ApiError> {
    let page = parse_positive(query.page.as_deref());
    let limit = parse_positive(query.limit.as_deref());

    let page = state
        .book_service
        .list_books(page, limit)
        .await
        .map_err(ApiError::from)?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        ListBooksResponseData {
            total: page.total,
            page: page.page,
            limit: page.limit,
            books: page.books.iter().map(BookData::from).collect(),
        },
    ))
}

fn parse_positive(raw: Option<&str>) -> Option<usize> {
    raw.and_then(|s| s.parse::<usize>().ok()).filter(|n| *n >= 1)
}
