use serde::Serialize;

use crate::domain::book::models::Book;

pub mod add_book;
pub mod delete_book;
pub mod get_book;
pub mod list_books;
pub mod search_books;
pub mod update_book;

/// Book as exposed over the wire, camelCase like the persisted records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookData {
    pub id: String,
    pub title: String,
    pub author: String,
    pub genre: String,
    pub published_year: i32,
    pub user_id: String,
}

impl From<&Book> for BookData {
    fn from(book: &Book) -> Self {
        Self {
            id: book.id.to_string(),
            title: book.title.clone(),
            author: book.author.clone(),
            genre: book.genre.clone(),
            published_year: book.published_year,
            user_id: book.owner.to_string(),
        }
    }
}
