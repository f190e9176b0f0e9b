use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::book::errors::BookError;
use crate::domain::book::models::Book;
use crate::domain::book::models::BookId;
use crate::domain::book::models::BookPage;
use crate::domain::book::models::CreateBookCommand;
use crate::domain::book::models::UpdateBookCommand;
use crate::domain::book::ports::BookRepository;
use crate::domain::book::ports::BookServicePort;
use crate::domain::user::models::UserId;

/// Domain service implementation for book operations.
///
/// Concrete implementation of BookServicePort with dependency injection.
pub struct BookService<BR>
where
    BR: BookRepository,
{
    repository: Arc<BR>,
}

impl<BR> BookService<BR>
where
    BR: BookRepository,
{
    pub fn new(repository: Arc<BR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<BR> BookServicePort for BookService<BR>
where
    BR: BookRepository,
{
    async fn list_books(
        &self,
        page: Option<usize>,
        limit: Option<usize>,
    ) -> Result<BookPage, BookError> {
        let books = self.repository.list_all().await?;
        let total = books.len();

        let page = page.unwrap_or(1);
        let limit = limit.unwrap_or(total);

        let start = page.saturating_sub(1).saturating_mul(limit);
        let books = books.into_iter().skip(start).take(limit).collect();

        Ok(BookPage {
            total,
            page,
            limit,
            books,
        })
    }

    async fn get_book(&self, id: &BookId) -> Result<Book, BookError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(BookError::NotFound(id.to_string()))
    }

    async fn add_book(
        &self,
        command: CreateBookCommand,
        owner: &UserId,
    ) -> Result<Book, BookError> {
        let fields = command.validate().map_err(BookError::Validation)?;

        let book = Book {
            id: BookId::new(),
            title: fields.title,
            author: fields.author,
            genre: fields.genre,
            published_year: fields.published_year,
            owner: *owner,
        };

        self.repository.create(book).await
    }

    async fn update_book(
        &self,
        id: &BookId,
        command: UpdateBookCommand,
        requester: &UserId,
    ) -> Result<Book, BookError> {
        let mut book = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(BookError::NotFound(id.to_string()))?;

        // Ownership is decided before the payload is even validated; a
        // non-owner gets the same refusal for any payload.
        if book.owner != *requester {
            return Err(BookError::Forbidden(
                "Not authorized to update this book".to_string(),
            ));
        }

        let violations = command.violations();
        if !violations.is_empty() {
            return Err(BookError::Validation(violations));
        }

        command.apply_to(&mut book);

        self.repository.update(book).await
    }

    async fn delete_book(&self, id: &BookId, requester: &UserId) -> Result<Book, BookError> {
        let book = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(BookError::NotFound(id.to_string()))?;

        if book.owner != *requester {
            return Err(BookError::Forbidden(
                "Not authorized to delete this book".to_string(),
            ));
        }

        self.repository.delete(id).await
    }

    async fn search_by_genre(&self, genre: &str) -> Result<Vec<Book>, BookError> {
        self.repository.find_by_genre(genre).await
    }
}
