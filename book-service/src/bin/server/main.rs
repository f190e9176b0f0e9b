use std::sync::Arc;

use auth::Authenticator;
use book_service::config::Config;
use book_service::domain::book::service::BookService;
use book_service::domain::user::service::UserService;
use book_service::inbound::http::router::create_router;
use book_service::outbound::repositories::JsonBookRepository;
use book_service::outbound::repositories::JsonUserRepository;
use chrono::Duration;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "book_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "book-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        http_port = config.server.http_port,
        data_dir = %config.storage.data_dir.display(),
        token_lifetime_days = config.jwt.expiration_days,
        "Configuration loaded"
    );

    // Refuses to start without a signing key unless the insecure fallback
    // was explicitly opted into
    let signing_key = config.jwt.signing_key()?;
    let authenticator = Arc::new(Authenticator::new(
        signing_key.as_bytes(),
        Duration::days(config.jwt.expiration_days),
    ));

    tokio::fs::create_dir_all(&config.storage.data_dir).await?;
    let user_repository = Arc::new(JsonUserRepository::new(config.storage.users_file()));
    let book_repository = Arc::new(JsonBookRepository::new(config.storage.books_file()));

    let user_service = Arc::new(UserService::new(user_repository));
    let book_service = Arc::new(BookService::new(book_repository));

    let address = format!("0.0.0.0:{}", config.server.http_port);
    let listener = tokio::net::TcpListener::bind(&address).await?;
    tracing::info!(address = %address, protocol = "http", "Http server listening");

    let application = create_router(user_service, book_service, authenticator);
    axum::serve(listener, application).await?;

    Ok(())
}
