use auth::AuthenticationError;
use axum::extract::State;
use axum::http::StatusCode;
use serde::Deserialize;

use super::AuthResponseData;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::PASSWORD_MIN_LENGTH;
use crate::domain::user::ports::UserServicePort;
use crate::domain::validation::FieldViolation;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiJson;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

/// HTTP request body for login (raw JSON).
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    email: Option<String>,
    password: Option<String>,
}

impl LoginRequest {
    /// Same field rules as registration, so a malformed login payload is a
    /// validation failure rather than a credentials failure.
    fn try_into_fields(self) -> Result<(EmailAddress, String), Vec<FieldViolation>> {
        let mut violations = Vec::new();

        let email = match self.email {
            Some(raw) => match EmailAddress::new(raw) {
                Ok(email) => Some(email),
                Err(e) => {
                    violations.push(FieldViolation::new("email", e.to_string()));
                    None
                }
            },
            None => {
                violations.push(FieldViolation::new("email", "email is required"));
                None
            }
        };

        let password = match self.password {
            Some(password) if password.len() >= PASSWORD_MIN_LENGTH => Some(password),
            Some(_) => {
                violations.push(FieldViolation::new(
                    "password",
                    format!("Password must be at least {} characters", PASSWORD_MIN_LENGTH),
                ));
                None
            }
            None => {
                violations.push(FieldViolation::new("password", "password is required"));
                None
            }
        };

        match (email, password) {
            (Some(email), Some(password)) => Ok((email, password)),
            _ => Err(violations),
        }
    }
}

pub async fn login(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<LoginRequest>,
) -> Result<ApiSuccess<AuthResponseData>, ApiError> {
    let (email, password) = body.try_into_fields().map_err(ApiError::Validation)?;

    // An unknown email and a wrong password produce the same response
    let user = state
        .user_service
        .get_user_by_email(email.as_str())
        .await
        .map_err(ApiError::from)?;

    let token = state
        .authenticator
        .authenticate(&password, &user.password_hash, user.id)
        .map_err(|e| match e {
            AuthenticationError::InvalidCredentials => {
                ApiError::Unauthorized("Invalid credentials".to_string())
            }
            AuthenticationError::PasswordError(err) => {
                ApiError::InternalServerError(format!("Password verification failed: {}", err))
            }
            AuthenticationError::TokenError(err) => {
                ApiError::InternalServerError(format!("Token generation failed: {}", err))
            }
        })?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        AuthResponseData {
            token,
            user: (&user).into(),
        },
    ))
}
