use async_trait::async_trait;

use crate::domain::user::errors::UserError;
use crate::domain::user::models::LoginResult;
use crate::domain::user::models::NewUser;
use crate::domain::user::models::RegisterUserCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::Username;

/// Port for authentication and account operations.
#[async_trait]
pub trait UserServicePort: Send + Sync + 'static {
    /// True iff a stored record with this exact (case-sensitive) username
    /// exists.
    ///
    /// # Errors
    /// * `DatabaseError` - Store operation failed
    async fn is_username_taken(&self, username: &Username) -> Result<bool, UserError>;

    /// Register a new account.
    ///
    /// Hashes the password and persists the record; the returned entity
    /// carries the digest, never the plaintext.
    ///
    /// # Errors
    /// * `UsernameAlreadyExists` - Username is already taken
    /// * `DatabaseError` - Store operation failed
    async fn register(&self, command: RegisterUserCommand) -> Result<User, UserError>;

    /// Verify credentials and issue an access token.
    ///
    /// The username matches case-insensitively. Unknown usernames and wrong
    /// passwords are indistinguishable: both produce `InvalidCredentials`.
    ///
    /// # Errors
    /// * `InvalidCredentials` - No record matches the submitted credentials
    /// * `TokenIssuance` - Token signing failed
    /// * `DatabaseError` - Store operation failed
    async fn login(&self, username: &str, password: &str) -> Result<LoginResult, UserError>;

    /// Retrieve user by identifier.
    ///
    /// # Errors
    /// * `NotFound` - User does not exist
    /// * `DatabaseError` - Store operation failed
    async fn get_user(&self, id: i32) -> Result<User, UserError>;

    /// Retrieve all users ordered by display name.
    ///
    /// # Errors
    /// * `DatabaseError` - Store operation failed
    async fn list_users(&self) -> Result<Vec<User>, UserError>;
}

/// Persistence operations for user records.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Insert a new user; the store assigns the id.
    ///
    /// # Errors
    /// * `UsernameAlreadyExists` - Unique constraint violated
    /// * `DatabaseError` - Store operation failed
    async fn create(&self, user: NewUser) -> Result<User, UserError>;

    /// Exact (case-sensitive) username lookup.
    ///
    /// # Errors
    /// * `DatabaseError` - Store operation failed
    async fn find_by_username(&self, username: &Username) -> Result<Option<User>, UserError>;

    /// Single lookup matching username case-insensitively and the password
    /// digest exactly; used by login.
    ///
    /// # Errors
    /// * `DatabaseError` - Store operation failed
    async fn find_by_credentials(
        &self,
        username: &str,
        password_hash: &str,
    ) -> Result<Option<User>, UserError>;

    /// Retrieve user by identifier.
    ///
    /// # Errors
    /// * `DatabaseError` - Store operation failed
    async fn find_by_id(&self, id: i32) -> Result<Option<User>, UserError>;

    /// Retrieve all users ordered by display name.
    ///
    /// # Errors
    /// * `DatabaseError` - Store operation failed
    async fn list_all(&self) -> Result<Vec<User>, UserError>;
}
