use serde::Serialize;

use crate::domain::user::models::User;

pub mod login;
pub mod register;

/// User as exposed over the wire. The password hash never appears here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserData {
    pub id: String,
    pub email: String,
    pub name: String,
}

impl From<&User> for UserData {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            email: user.email.as_str().to_string(),
            name: user.name.as_str().to_string(),
        }
    }
}

/// Body of successful register and login responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthResponseData {
    pub token: String,
    pub user: UserData,
}
