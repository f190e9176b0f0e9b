use std::fmt;

use uuid::Uuid;

use crate::domain::book::errors::BookIdError;
use crate::domain::user::models::UserId;
use crate::domain::validation::FieldViolation;

/// Book aggregate entity.
///
/// Every book has exactly one owner, recorded at creation time. Only the
/// owner may mutate or delete it; any authenticated user may read it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub author: String,
    pub genre: String,
    pub published_year: i32,
    pub owner: UserId,
}

/// Book unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BookId(pub Uuid);

impl BookId {
    /// Generate a new random book ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a book ID from string.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, BookIdError> {
        Uuid::parse_str(s)
            .map(BookId)
            .map_err(|e| BookIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for BookId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// One page of the book collection plus paging metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookPage {
    pub total: usize,
    pub page: usize,
    pub limit: usize,
    pub books: Vec<Book>,
}

/// Raw fields for creating a book, as received from the client.
///
/// All fields are optional at this stage so that missing and empty values
/// surface as field violations rather than body-parse failures.
#[derive(Debug, Clone, Default)]
pub struct CreateBookCommand {
    pub title: Option<String>,
    pub author: Option<String>,
    pub genre: Option<String>,
    pub published_year: Option<i32>,
}

/// Validated field set for a new book.
#[derive(Debug, Clone)]
pub struct NewBookFields {
    pub title: String,
    pub author: String,
    pub genre: String,
    pub published_year: i32,
}

impl CreateBookCommand {
    /// Validate all fields, collecting every violation.
    ///
    /// # Errors
    /// A non-empty list of violations when any field is missing or empty.
    pub fn validate(self) -> Result<NewBookFields, Vec<FieldViolation>> {
        let mut violations = Vec::new();

        let title = require_text("title", self.title, &mut violations);
        let author = require_text("author", self.author, &mut violations);
        let genre = require_text("genre", self.genre, &mut violations);

        let published_year = match self.published_year {
            Some(year) => Some(year),
            None => {
                violations.push(FieldViolation::new(
                    "publishedYear",
                    "publishedYear must be a number",
                ));
                None
            }
        };

        match (title, author, genre, published_year) {
            (Some(title), Some(author), Some(genre), Some(published_year)) => Ok(NewBookFields {
                title,
                author,
                genre,
                published_year,
            }),
            _ => Err(violations),
        }
    }
}

/// Partial update for a book; absent fields keep their prior values.
#[derive(Debug, Clone, Default)]
pub struct UpdateBookCommand {
    pub title: Option<String>,
    pub author: Option<String>,
    pub genre: Option<String>,
    pub published_year: Option<i32>,
}

impl UpdateBookCommand {
    /// Validate the provided subset of fields, collecting every violation.
    pub fn violations(&self) -> Vec<FieldViolation> {
        let mut violations = Vec::new();

        for (field, value) in [
            ("title", &self.title),
            ("author", &self.author),
            ("genre", &self.genre),
        ] {
            if let Some(text) = value {
                if text.is_empty() {
                    violations.push(FieldViolation::new(
                        field,
                        format!("{} must be a non-empty string", field),
                    ));
                }
            }
        }

        violations
    }

    /// Shallow merge: replace only the fields that were provided.
    pub fn apply_to(self, book: &mut Book) {
        if let Some(title) = self.title {
            book.title = title;
        }
        if let Some(author) = self.author {
            book.author = author;
        }
        if let Some(genre) = self.genre {
            book.genre = genre;
        }
        if let Some(published_year) = self.published_year {
            book.published_year = published_year;
        }
    }
}

fn require_text(
    field: &'static str,
    value: Option<String>,
    violations: &mut Vec<FieldViolation>,
) -> Option<String> {
    match value {
        Some(text) if !text.is_empty() => Some(text),
        Some(_) => {
            violations.push(FieldViolation::new(
                field,
                format!("{} must be a non-empty string", field),
            ));
            None
        }
        None => {
            violations.push(FieldViolation::new(field, format!("{} is required", field)));
            None
        }
    }
}
