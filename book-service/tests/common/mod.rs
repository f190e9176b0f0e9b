use std::path::PathBuf;
use std::sync::Arc;

use auth::Authenticator;
use auth::TokenHandler;
use book_service::domain::book::service::BookService;
use book_service::domain::user::service::UserService;
use book_service::inbound::http::router::create_router;
use book_service::outbound::repositories::JsonBookRepository;
use book_service::outbound::repositories::JsonUserRepository;
use chrono::Duration;
use serde_json::json;
use serde_json::Value;

const TEST_SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";

/// Test application that spawns a real server over a throwaway data dir
pub struct TestApp {
    pub address: String,
    pub api_client: reqwest::Client,
    pub token_handler: TokenHandler,
    data_dir: PathBuf,
}

impl TestApp {
    /// Spawn the application in a background task and return TestApp
    pub async fn spawn() -> Self {
        let data_dir =
            std::env::temp_dir().join(format!("book-service-test-{}", uuid::Uuid::new_v4()));
        tokio::fs::create_dir_all(&data_dir)
            .await
            .expect("Failed to create test data dir");

        // Use random port (0 = OS assigns)
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let user_repository = Arc::new(JsonUserRepository::new(data_dir.join("users.json")));
        let book_repository = Arc::new(JsonBookRepository::new(data_dir.join("books.json")));

        let user_service = Arc::new(UserService::new(user_repository));
        let book_service = Arc::new(BookService::new(book_repository));
        let authenticator = Arc::new(Authenticator::new(TEST_SECRET, Duration::days(7)));

        let router = create_router(user_service, book_service, authenticator);

        // Spawn server in background
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            api_client: reqwest::Client::new(),
            token_handler: TokenHandler::new(TEST_SECRET),
            data_dir,
        }
    }

    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(format!("{}{}", self.address, path))
    }

    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }

    pub fn get_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.get(path).bearer_auth(token)
    }

    pub fn post_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.post(path).bearer_auth(token)
    }

    pub fn put_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.api_client
            .put(format!("{}{}", self.address, path))
            .bearer_auth(token)
    }

    pub fn delete_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.api_client
            .delete(format!("{}{}", self.address, path))
            .bearer_auth(token)
    }

    /// Register a user and return (token, user_id)
    pub async fn register_user(&self, email: &str, password: &str) -> (String, String) {
        let response = self
            .post("/api/auth/register")
            .json(&json!({
                "email": email,
                "password": password,
                "name": "Test Reader"
            }))
            .send()
            .await
            .expect("Failed to execute request");
        assert_eq!(response.status(), reqwest::StatusCode::OK);

        let body: Value = response.json().await.expect("Failed to parse response");
        let token = body["data"]["token"]
            .as_str()
            .expect("Missing token")
            .to_string();
        let user_id = body["data"]["user"]["id"]
            .as_str()
            .expect("Missing user id")
            .to_string();

        (token, user_id)
    }

    /// Add a book as the given user and return its id
    pub async fn add_book(&self, token: &str, title: &str, genre: &str) -> String {
        let response = self
            .post_authenticated("/api/books", token)
            .json(&json!({
                "title": title,
                "author": "Author",
                "genre": genre,
                "publishedYear": 1999
            }))
            .send()
            .await
            .expect("Failed to execute request");
        assert_eq!(response.status(), reqwest::StatusCode::CREATED);

        let body: Value = response.json().await.expect("Failed to parse response");
        body["data"]["id"]
            .as_str()
            .expect("Missing book id")
            .to_string()
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.data_dir);
    }
}
