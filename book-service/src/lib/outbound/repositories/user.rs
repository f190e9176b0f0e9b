use std::path::PathBuf;

use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;
use uuid::Uuid;

use crate::domain::user::errors::UserError;
use crate::domain::user::models::DisplayName;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::outbound::repositories::store::JsonStore;
use crate::outbound::repositories::store::StoreError;

/// On-disk user record, camelCase to match the original data files.
/// The `password` field holds the Argon2id hash, never plaintext.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredUser {
    id: Uuid,
    email: String,
    name: String,
    password: String,
    created_at: DateTime<Utc>,
}

impl From<&User> for StoredUser {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.0,
            email: user.email.as_str().to_string(),
            name: user.name.as_str().to_string(),
            password: user.password_hash.clone(),
            created_at: user.created_at,
        }
    }
}

impl StoredUser {
    fn try_into_domain(self) -> Result<User, UserError> {
        Ok(User {
            id: UserId(self.id),
            email: EmailAddress::new(self.email)
                .map_err(|e| UserError::Storage(format!("Corrupt user record: {}", e)))?,
            name: DisplayName::new(self.name)
                .map_err(|e| UserError::Storage(format!("Corrupt user record: {}", e)))?,
            password_hash: self.password,
            created_at: self.created_at,
        })
    }
}

/// Flat-file user repository over a single JSON document.
pub struct JsonUserRepository {
    store: JsonStore<StoredUser>,
}

impl JsonUserRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            store: JsonStore::new(path),
        }
    }
}

impl From<StoreError> for UserError {
    fn from(err: StoreError) -> Self {
        UserError::Storage(err.to_string())
    }
}

#[async_trait]
impl crate::domain::user::ports::UserRepository for JsonUserRepository {
    async fn create(&self, user: User) -> Result<User, UserError> {
        let mut records = self.store.load().await?;

        // Full-table scan before insert; racy under concurrent writers
        if records.iter().any(|r| r.email == user.email.as_str()) {
            return Err(UserError::EmailAlreadyExists(
                user.email.as_str().to_string(),
            ));
        }

        records.push(StoredUser::from(&user));
        self.store.save(&records).await?;

        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserError> {
        let records = self.store.load().await?;

        records
            .into_iter()
            .find(|r| r.email == email)
            .map(StoredUser::try_into_domain)
            .transpose()
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use chrono::Utc;

    use super::*;
    use crate::domain::user::ports::UserRepository;

    fn scratch_file() -> PathBuf {
        std::env::temp_dir().join(format!("users-repo-test-{}.json", Uuid::new_v4()))
    }

    fn user(email: &str) -> User {
        User {
            id: UserId::new(),
            email: EmailAddress::new(email.to_string()).unwrap(),
            name: DisplayName::new("Test Reader".to_string()).unwrap(),
            password_hash: "$argon2id$test_hash".to_string(),
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_create_and_find_by_email() {
        let path = scratch_file();
        let repository = JsonUserRepository::new(path.clone());

        let created = repository.create(user("reader@example.com")).await.unwrap();

        let found = repository
            .find_by_email("reader@example.com")
            .await
            .unwrap()
            .expect("User should exist");
        assert_eq!(found.id, created.id);
        assert_eq!(found.password_hash, "$argon2id$test_hash");

        let missing = repository.find_by_email("other@example.com").await.unwrap();
        assert!(missing.is_none());

        let _ = std::fs::remove_file(path);
    }

    #[tokio::test]
    async fn test_create_duplicate_email() {
        let path = scratch_file();
        let repository = JsonUserRepository::new(path.clone());

        repository.create(user("reader@example.com")).await.unwrap();
        let result = repository.create(user("reader@example.com")).await;
        assert!(matches!(
            result.unwrap_err(),
            UserError::EmailAlreadyExists(_)
        ));

        let _ = std::fs::remove_file(path);
    }

    #[tokio::test]
    async fn test_users_survive_reopening_the_store() {
        let path = scratch_file();

        {
            let repository = JsonUserRepository::new(path.clone());
            repository.create(user("reader@example.com")).await.unwrap();
        }

        let reopened = JsonUserRepository::new(path.clone());
        let found = reopened.find_by_email("reader@example.com").await.unwrap();
        assert!(found.is_some());

        let _ = std::fs::remove_file(path);
    }
}
