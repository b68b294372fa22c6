//! Wire shapes and paths of the users REST contract.

use serde::{Deserialize, Serialize};

use crate::domain::UserId;

/// Body of `POST` and `PUT` requests. The backend assigns or takes the id from the path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPayload {
    pub name: String,
    pub email: String,
}

impl UserPayload {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }
}

pub const USER_UPDATED: &str = "User updated";
pub const USER_DELETED: &str = "User deleted";

/// `/api/{backend}/users`
pub fn users_route(backend: &str) -> String {
    format!("/api/{backend}/users")
}

/// `/api/{backend}/users/{id}`
pub fn user_route(backend: &str, user_id: UserId) -> String {
    format!("{}/{}", users_route(backend), user_id.0)
}
