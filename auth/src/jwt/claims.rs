use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Claim set carried by an access token.
///
/// `name` and `role` identify the authenticated user; `exp` and `iat` are
/// Unix timestamps bounding the token's validity window. The token is a
/// self-contained bearer credential: valid from issuance until `exp`, with
/// no server-side state.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Username of the authenticated user
    pub name: String,

    /// Role tag used for authorization checks
    pub role: String,

    /// Expiration time (Unix timestamp)
    pub exp: i64,

    /// Issued at (Unix timestamp)
    pub iat: i64,
}

impl Claims {
    /// Build claims for an authenticated user.
    ///
    /// Expiry is `validity_days` days after issuance.
    ///
    /// # Arguments
    /// * `name` - Username to embed
    /// * `role` - Role tag to embed
    /// * `validity_days` - Days until the token expires
    pub fn for_user(name: impl Into<String>, role: impl Into<String>, validity_days: i64) -> Self {
        let now = Utc::now();
        let expiration = now + Duration::days(validity_days);

        Self {
            name: name.into(),
            role: role.into(),
            exp: expiration.timestamp(),
            iat: now.timestamp(),
        }
    }

    /// Check whether the token is expired at `current_timestamp`.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        self.exp < current_timestamp
    }
}
