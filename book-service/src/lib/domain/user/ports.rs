use async_trait::async_trait;

use crate::domain::user::errors::UserError;
use crate::domain::user::models::RegisterUserCommand;
use crate::domain::user::models::User;

/// Port for user domain service operations.
#[async_trait]
pub trait UserServicePort: Send + Sync + 'static {
    /// Register a new user with validated fields.
    ///
    /// The plaintext password in the command is hashed before it is stored.
    ///
    /// # Errors
    /// * `EmailAlreadyExists` - Email is already registered
    /// * `Storage` - Persistence operation failed
    async fn register(&self, command: RegisterUserCommand) -> Result<User, UserError>;

    /// Retrieve a user by email address.
    ///
    /// # Errors
    /// * `NotFoundByEmail` - No user with this email
    /// * `Storage` - Persistence operation failed
    async fn get_user_by_email(&self, email: &str) -> Result<User, UserError>;
}

/// Persistence operations for the user collection.
///
/// The backing store reads and rewrites the whole collection on every call;
/// there are no partial updates. Concurrent writers race and the last write
/// wins, matching the flat-file contract this service preserves.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Persist a new user.
    ///
    /// Uniqueness of the email is enforced by a scan over the existing
    /// collection immediately before the insert; it is not atomic.
    ///
    /// # Errors
    /// * `EmailAlreadyExists` - Email is already registered
    /// * `Storage` - Persistence operation failed
    async fn create(&self, user: User) -> Result<User, UserError>;

    /// Retrieve a user by email via linear scan.
    ///
    /// Absence is a valid outcome, not an error.
    ///
    /// # Errors
    /// * `Storage` - Persistence operation failed
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserError>;
}
