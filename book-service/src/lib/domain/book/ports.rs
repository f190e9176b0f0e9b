use async_trait::async_trait;

use crate::domain::book::errors::BookError;
use crate::domain::book::models::Book;
use crate::domain::book::models::BookId;
use crate::domain::book::models::BookPage;
use crate::domain::book::models::CreateBookCommand;
use crate::domain::book::models::UpdateBookCommand;
use crate::domain::user::models::UserId;

/// Port for book domain service operations.
#[async_trait]
pub trait BookServicePort: Send + Sync + 'static {
    /// List books with naive slicing pagination.
    ///
    /// `page` defaults to 1 and `limit` to the total count, so an
    /// unparameterised call returns the whole collection.
    ///
    /// # Errors
    /// * `Storage` - Persistence operation failed
    async fn list_books(
        &self,
        page: Option<usize>,
        limit: Option<usize>,
    ) -> Result<BookPage, BookError>;

    /// Retrieve a single book by identifier.
    ///
    /// # Errors
    /// * `NotFound` - Book does not exist
    /// * `Storage` - Persistence operation failed
    async fn get_book(&self, id: &BookId) -> Result<Book, BookError>;

    /// Validate and add a new book owned by `owner`.
    ///
    /// # Errors
    /// * `Validation` - One or more fields are missing or empty
    /// * `Storage` - Persistence operation failed
    async fn add_book(&self, command: CreateBookCommand, owner: &UserId)
        -> Result<Book, BookError>;

    /// Merge the provided fields into an existing book.
    ///
    /// Checks run in order: existence, ownership, then field validation,
    /// so a non-owner is refused before their payload is inspected.
    ///
    /// # Errors
    /// * `NotFound` - Book does not exist
    /// * `Forbidden` - Requester is not the owner
    /// * `Validation` - A provided field is empty
    /// * `Storage` - Persistence operation failed
    async fn update_book(
        &self,
        id: &BookId,
        command: UpdateBookCommand,
        requester: &UserId,
    ) -> Result<Book, BookError>;

    /// Delete a book, returning the removed record.
    ///
    /// # Errors
    /// * `NotFound` - Book does not exist
    /// * `Forbidden` - Requester is not the owner
    /// * `Storage` - Persistence operation failed
    async fn delete_book(&self, id: &BookId, requester: &UserId) -> Result<Book, BookError>;

    /// Case-insensitive exact-match search on genre.
    ///
    /// An empty result list is a success, not an error.
    ///
    /// # Errors
    /// * `Storage` - Persistence operation failed
    async fn search_by_genre(&self, genre: &str) -> Result<Vec<Book>, BookError>;
}

/// Persistence operations for the book collection.
///
/// Every mutating call rewrites the whole persisted collection from the
/// in-memory list; there is no locking and concurrent writers race with
/// last-write-wins semantics.
#[async_trait]
pub trait BookRepository: Send + Sync + 'static {
    /// Retrieve all books in insertion order.
    ///
    /// # Errors
    /// * `Storage` - Persistence operation failed
    async fn list_all(&self) -> Result<Vec<Book>, BookError>;

    /// Retrieve a book by identifier via linear scan.
    ///
    /// # Errors
    /// * `Storage` - Persistence operation failed
    async fn find_by_id(&self, id: &BookId) -> Result<Option<Book>, BookError>;

    /// Append a new book and persist the full collection.
    ///
    /// # Errors
    /// * `Storage` - Persistence operation failed
    async fn create(&self, book: Book) -> Result<Book, BookError>;

    /// Replace an existing book in place and persist the full collection.
    ///
    /// # Errors
    /// * `NotFound` - Book does not exist
    /// * `Storage` - Persistence operation failed
    async fn update(&self, book: Book) -> Result<Book, BookError>;

    /// Remove a book, persist the full collection, and return the removed
    /// record.
    ///
    /// # Errors
    /// * `NotFound` - Book does not exist
    /// * `Storage` - Persistence operation failed
    async fn delete(&self, id: &BookId) -> Result<Book, BookError>;

    /// Retrieve all books whose genre matches case-insensitively.
    ///
    /// # Errors
    /// * `Storage` - Persistence operation failed
    async fn find_by_genre(&self, genre: &str) -> Result<Vec<Book>, BookError>;
}
