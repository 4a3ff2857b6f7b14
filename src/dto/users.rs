use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::User;

/// Registration and edit form. Fields default to empty strings so presence
/// is checked by the command layer (missing input becomes a notice, not a
/// deserialization rejection).
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct UserForm {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct UsersPage {
    pub notice: Option<String>,
    pub users: Vec<User>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct EditUserPage {
    pub notice: Option<String>,
    pub user: User,
}

/// Confirmation step of the two-step delete.
#[derive(Debug, Serialize, ToSchema)]
pub struct DeleteUserPage {
    pub prompt: String,
    pub user: User,
}
