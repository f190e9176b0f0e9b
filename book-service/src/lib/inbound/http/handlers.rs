use axum::async_trait;
use axum::extract::FromRequest;
use axum::extract::Request;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::domain::book::errors::BookError;
use crate::domain::user::errors::UserError;
use crate::domain::validation::FieldViolation;

pub mod auth;
pub mod books;

/// Response envelope shared by every endpoint:
/// `{success, data?, error?, details?}`.
#[derive(Debug, Clone, Serialize)]
pub struct ApiResponseBody<T: Serialize> {
    pub success: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<FieldViolation>>,
}

#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize>(StatusCode, Json<ApiResponseBody<T>>);

impl<T: Serialize> ApiSuccess<T> {
    pub fn new(status: StatusCode, data: T) -> Self {
        ApiSuccess(
            status,
            Json(ApiResponseBody {
                success: true,
                data: Some(data),
                error: None,
                details: None,
            }),
        )
    }
}

impl<T: Serialize> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// 400 with per-field details
    Validation(Vec<FieldViolation>),
    /// 400
    BadRequest(String),
    /// 400, duplicate registration
    AlreadyExists(String),
    /// 401
    Unauthorized(String),
    /// 403
    Forbidden(String),
    /// 404
    NotFound(String),
    /// 500; the message is logged, never sent to the client
    InternalServerError(String),
}

impl From<anyhow::Error> for ApiError {
    fn from(e: anyhow::Error) -> Self {
        Self::InternalServerError(e.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error, details) = match self {
            ApiError::Validation(details) => (
                StatusCode::BAD_REQUEST,
                "Validation failed".to_string(),
                Some(details),
            ),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg, None),
            ApiError::AlreadyExists(msg) => (StatusCode::BAD_REQUEST, msg, None),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg, None),
            ApiError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg, None),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg, None),
            ApiError::InternalServerError(msg) => {
                // Degrade to a generic message with no detail leak
                tracing::error!(error = %msg, "Request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                    None,
                )
            }
        };

        let body = ApiResponseBody::<()> {
            success: false,
            data: None,
            error: Some(error),
            details,
        };

        (status, Json(body)).into_response()
    }
}

impl From<BookError> for ApiError {
    fn from(err: BookError) -> Self {
        match err {
            BookError::Validation(violations) => ApiError::Validation(violations),
            BookError::NotFound(_) => ApiError::NotFound(err.to_string()),
            BookError::Forbidden(_) => ApiError::Forbidden(err.to_string()),
            BookError::Storage(_) | BookError::Unknown(_) => {
                ApiError::InternalServerError(err.to_string())
            }
        }
    }
}

impl From<UserError> for ApiError {
    fn from(err: UserError) -> Self {
        match err {
            // Whether the email exists must not be observable at login
            UserError::NotFoundByEmail(_) => {
                ApiError::Unauthorized("Invalid credentials".to_string())
            }
            UserError::EmailAlreadyExists(_) => ApiError::AlreadyExists(err.to_string()),
            UserError::Storage(_) | UserError::Unknown(_) => {
                ApiError::InternalServerError(err.to_string())
            }
        }
    }
}

/// `axum::Json` with rejections mapped into the response envelope, so a
/// malformed body comes back as a 400 envelope error instead of axum's
/// plain-text 422.
pub struct ApiJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;

        Ok(ApiJson(value))
    }
}
