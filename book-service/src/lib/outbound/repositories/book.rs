use std::path::PathBuf;

use async_trait::async_trait;
use serde::Deserialize;
use serde::Serialize;
use uuid::Uuid;

use crate::domain::book::errors::BookError;
use crate::domain::book::models::Book;
use crate::domain::book::models::BookId;
use crate::domain::book::ports::BookRepository;
use crate::domain::user::models::UserId;
use crate::outbound::repositories::store::JsonStore;
use crate::outbound::repositories::store::StoreError;

/// On-disk book record, camelCase to match the original data files.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredBook {
    id: Uuid,
    title: String,
    author: String,
    genre: String,
    published_year: i32,
    user_id: Uuid,
}

impl From<&Book> for StoredBook {
    fn from(book: &Book) -> Self {
        Self {
            id: book.id.0,
            title: book.title.clone(),
            author: book.author.clone(),
            genre: book.genre.clone(),
            published_year: book.published_year,
            user_id: book.owner.0,
        }
    }
}

impl From<StoredBook> for Book {
    fn from(record: StoredBook) -> Self {
        Self {
            id: BookId(record.id),
            title: record.title,
            author: record.author,
            genre: record.genre,
            published_year: record.published_year,
            owner: UserId(record.user_id),
        }
    }
}

/// Flat-file book repository over a single JSON document.
///
/// All lookups are linear scans; all mutations rewrite the whole file.
pub struct JsonBookRepository {
    store: JsonStore<StoredBook>,
}

impl JsonBookRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            store: JsonStore::new(path),
        }
    }
}

impl From<StoreError> for BookError {
    fn from(err: StoreError) -> Self {
        BookError::Storage(err.to_string())
    }
}

#[async_trait]
impl BookRepository for JsonBookRepository {
    async fn list_all(&self) -> Result<Vec<Book>, BookError> {
        let records = self.store.load().await?;
        Ok(records.into_iter().map(Book::from).collect())
    }

    async fn find_by_id(&self, id: &BookId) -> Result<Option<Book>, BookError> {
        let records = self.store.load().await?;
        Ok(records
            .into_iter()
            .find(|r| r.id == id.0)
            .map(Book::from))
    }

    async fn create(&self, book: Book) -> Result<Book, BookError> {
        let mut records = self.store.load().await?;
        records.push(StoredBook::from(&book));
        self.store.save(&records).await?;

        Ok(book)
    }

    async fn update(&self, book: Book) -> Result<Book, BookError> {
        let mut records = self.store.load().await?;

        let position = records
            .iter()
            .position(|r| r.id == book.id.0)
            .ok_or(BookError::NotFound(book.id.to_string()))?;

        records[position] = StoredBook::from(&book);
        self.store.save(&records).await?;

        Ok(book)
    }

    async fn delete(&self, id: &BookId) -> Result<Book, BookError> {
        let mut records = self.store.load().await?;

        let position = records
            .iter()
            .position(|r| r.id == id.0)
            .ok_or(BookError::NotFound(id.to_string()))?;

        let removed = records.remove(position);
        self.store.save(&records).await?;

        Ok(removed.into())
    }

    async fn find_by_genre(&self, genre: &str) -> Result<Vec<Book>, BookError> {
        let records = self.store.load().await?;
        let genre = genre.to_lowercase();

        Ok(records
            .into_iter()
            .filter(|r| r.genre.to_lowercase() == genre)
            .map(Book::from)
            .collect())
    }
}
