use axum::extract::State;
use axum::http::StatusCode;
use serde::Deserialize;

use super::AuthResponseData;
use crate::domain::user::models::DisplayName;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::RegisterUserCommand;
use crate::domain::user::models::PASSWORD_MIN_LENGTH;
use crate::domain::user::ports::UserServicePort;
use crate::domain::validation::FieldViolation;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiJson;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

/// HTTP request body for registration (raw JSON).
///
/// Fields are optional so that absences become field violations instead of
/// body-parse failures.
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterRequest {
    email: Option<String>,
    password: Option<String>,
    name: Option<String>,
}

impl RegisterRequest {
    fn try_into_command(self) -> Result<RegisterUserCommand, Vec<FieldViolation>> {
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

        let name = match self.name {
            Some(raw) => match DisplayName::new(raw) {
                Ok(name) => Some(name),
                Err(e) => {
                    violations.push(FieldViolation::new("name", e.to_string()));
                    None
                }
            },
            None => {
                violations.push(FieldViolation::new("name", "name is required"));
                None
            }
        };

        match (email, password, name) {
            (Some(email), Some(password), Some(name)) => {
                Ok(RegisterUserCommand::new(email, name, password))
            }
            _ => Err(violations),
        }
    }
}

pub async fn register(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<RegisterRequest>,
) -> Result<ApiSuccess<AuthResponseData>, ApiError> {
    let command = body.try_into_command().map_err(ApiError::Validation)?;

    let user = state
        .user_service
        .register(command)
        .await
        .map_err(ApiError::from)?;

    let token = state
        .authenticator
        .issue_token(user.id)
        .map_err(|e| ApiError::InternalServerError(format!("Token generation failed: {}", e)))?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        AuthResponseData {
            token,
            user: (&user).into(),
        },
    ))
}
