use serde::Serialize;

use crate::domain::user::models::User;

pub mod get_user;
pub mod list_users;
pub mod login;
pub mod register;

pub use get_user::get_user;
pub use list_users::list_users;
pub use login::login;
pub use register::register;

/// Public projection of a user record.
///
/// The password hash is deliberately absent: it never crosses the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserData {
    pub id: i32,
    pub username: String,
    pub display_name: String,
    pub role: String,
}

impl From<&User> for UserData {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.as_str().to_string(),
            display_name: user.display_name.clone(),
            role: user.role.as_str().to_string(),
        }
    }
}
