use std::sync::Arc;

use async_trait::async_trait;
use auth::Authenticator;
use auth::Claims;

use crate::domain::user::errors::UserError;
use crate::domain::user::models::LoginResult;
use crate::domain::user::models::NewUser;
use crate::domain::user::models::RegisterUserCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::Username;
use crate::domain::user::ports::UserRepository;
use crate::domain::user::ports::UserServicePort;

/// Domain service implementation for registration and login.
///
/// Orchestrates lookup, digest comparison, and token issuance; the
/// Authenticator owns the digest and signing primitives.
pub struct UserService<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
    authenticator: Arc<Authenticator>,
    token_validity_days: i64,
}

impl<UR> UserService<UR>
where
    UR: UserRepository,
{
    /// Create a new user service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - User persistence implementation
    /// * `authenticator` - Digest hashing and token issuance
    /// * `token_validity_days` - Days until issued tokens expire
    pub fn new(
        repository: Arc<UR>,
        authenticator: Arc<Authenticator>,
        token_validity_days: i64,
    ) -> Self {
        Self {
            repository,
            authenticator,
            token_validity_days,
        }
    }
}

#[async_trait]
impl<UR> UserServicePort for UserService<UR>
where
    UR: UserRepository,
{
    async fn is_username_taken(&self, username: &Username) -> Result<bool, UserError> {
        Ok(self.repository.find_by_username(username).await?.is_some())
    }

    async fn register(&self, command: RegisterUserCommand) -> Result<User, UserError> {
        // Advisory check for the fast-path error message; the unique
        // constraint in the store is the backstop against concurrent
        // registrations with the same name.
        if self.is_username_taken(&command.username).await? {
            return Err(UserError::UsernameAlreadyExists(
                command.username.to_string(),
            ));
        }

        let password_hash = self.authenticator.hash_password(&command.password);

        let user = NewUser {
            username: command.username,
            display_name: command.display_name,
            password_hash,
            role: command.role,
        };

        self.repository.create(user).await
    }

    async fn login(&self, username: &str, password: &str) -> Result<LoginResult, UserError> {
        let password_hash = self.authenticator.hash_password(password);

        // Single lookup over both predicates; a miss reveals nothing about
        // which one failed.
        let user = self
            .repository
            .find_by_credentials(username, &password_hash)
            .await?
            .ok_or(UserError::InvalidCredentials)?;

        let claims = Claims::for_user(
            user.username.as_str(),
            user.role.as_str(),
            self.token_validity_days,
        );
        let token = self
            .authenticator
            .generate_token(&claims)
            .map_err(|e| UserError::TokenIssuance(e.to_string()))?;

        Ok(LoginResult { token, user })
    }

    async fn get_user(&self, id: i32) -> Result<User, UserError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(UserError::NotFound(id))
    }

    async fn list_users(&self) -> Result<Vec<User>, UserError> {
        self.repository.list_all().await
    }
}

#[cfg(test)]
mod tests {
    use auth::PasswordHasher;
    use mockall::mock;
    use mockall::predicate::*;

    use super::*;
    use crate::domain::user::models::Role;

    const TEST_SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";

    // Define mocks in the test module using mockall
    mock! {
        pub TestUserRepository {}

        #[async_trait]
        impl UserRepository for TestUserRepository {
            async fn create(&self, user: NewUser) -> Result<User, UserError>;
            async fn find_by_username(&self, username: &Username) -> Result<Option<User>, UserError>;
            async fn find_by_credentials(&self, username: &str, password_hash: &str) -> Result<Option<User>, UserError>;
            async fn find_by_id(&self, id: i32) -> Result<Option<User>, UserError>;
            async fn list_all(&self) -> Result<Vec<User>, UserError>;
        }
    }

    fn service(repository: MockTestUserRepository) -> UserService<MockTestUserRepository> {
        let authenticator = Arc::new(Authenticator::new(TEST_SECRET).unwrap());
        UserService::new(Arc::new(repository), authenticator, 7)
    }

    fn stored_user(username: &str, password: &str, role: Role) -> User {
        User {
            id: 1,
            username: Username::new(username.to_string()).unwrap(),
            display_name: "Ana".to_string(),
            password_hash: PasswordHasher::new().hash(password),
            role,
        }
    }

    #[tokio::test]
    async fn test_register_hashes_password() {
        let mut repository = MockTestUserRepository::new();

        repository
            .expect_find_by_username()
            .times(1)
            .returning(|_| Ok(None));

        repository
            .expect_create()
            .withf(|user| {
                user.username.as_str() == "ana"
                    && user.password_hash == PasswordHasher::new().hash("secret1")
            })
            .times(1)
            .returning(|user| {
                Ok(User {
                    id: 1,
                    username: user.username,
                    display_name: user.display_name,
                    password_hash: user.password_hash,
                    role: user.role,
                })
            });

        let service = service(repository);

        let command = RegisterUserCommand::new(
            Username::new("ana".to_string()).unwrap(),
            "secret1".to_string(),
            "Ana".to_string(),
            Role::User,
        );

        let user = service.register(command).await.unwrap();
        assert_eq!(user.id, 1);
        assert_eq!(user.username.as_str(), "ana");
        // Stored digest, never the plaintext
        assert_eq!(user.password_hash, "e52d98c459819a11775936d8dfbb7929");
        assert_eq!(user.password_hash.len(), 32);
    }

    #[tokio::test]
    async fn test_register_duplicate_username() {
        let mut repository = MockTestUserRepository::new();

        repository
            .expect_find_by_username()
            .times(1)
            .returning(|username| Ok(Some(stored_user(username.as_str(), "other", Role::User))));

        // The insert must never run when the advisory check hits.
        repository.expect_create().times(0);

        let service = service(repository);

        let command = RegisterUserCommand::new(
            Username::new("ana".to_string()).unwrap(),
            "secret1".to_string(),
            "Ana".to_string(),
            Role::User,
        );

        let result = service.register(command).await;
        assert!(matches!(
            result.unwrap_err(),
            UserError::UsernameAlreadyExists(_)
        ));
    }

    #[tokio::test]
    async fn test_is_username_taken() {
        let mut repository = MockTestUserRepository::new();

        repository
            .expect_find_by_username()
            .withf(|username| username.as_str() == "ana")
            .times(1)
            .returning(|username| Ok(Some(stored_user(username.as_str(), "pw", Role::User))));

        let service = service(repository);

        let taken = service
            .is_username_taken(&Username::new("ana".to_string()).unwrap())
            .await
            .unwrap();
        assert!(taken);
    }

    #[tokio::test]
    async fn test_login_success_issues_token() {
        let mut repository = MockTestUserRepository::new();

        let expected_hash = PasswordHasher::new().hash("secret1");
        repository
            .expect_find_by_credentials()
            .withf(move |username, hash| username == "ana" && hash == expected_hash)
            .times(1)
            .returning(|_, _| Ok(Some(stored_user("ana", "secret1", Role::User))));

        let service = service(repository);

        let result = service.login("ana", "secret1").await.unwrap();
        assert!(!result.token.is_empty());
        assert_eq!(result.user.username.as_str(), "ana");

        // Token claims mirror the stored record.
        let authenticator = Authenticator::new(TEST_SECRET).unwrap();
        let claims = authenticator.validate_token(&result.token).unwrap();
        assert_eq!(claims.name, "ana");
        assert_eq!(claims.role, "User");
        assert_eq!(claims.exp - claims.iat, 7 * 24 * 60 * 60);
    }

    #[tokio::test]
    async fn test_login_failure_is_uniform() {
        // Wrong password and unknown username both surface as the same
        // credential miss: the repository returns no row in either case.
        let mut repository = MockTestUserRepository::new();

        repository
            .expect_find_by_credentials()
            .times(2)
            .returning(|_, _| Ok(None));

        let service = service(repository);

        let wrong_password = service.login("ana", "wrong").await.unwrap_err();
        let unknown_user = service.login("nobody", "secret1").await.unwrap_err();

        assert!(matches!(wrong_password, UserError::InvalidCredentials));
        assert!(matches!(unknown_user, UserError::InvalidCredentials));
        assert_eq!(wrong_password.to_string(), unknown_user.to_string());
    }

    #[tokio::test]
    async fn test_get_user_not_found() {
        let mut repository = MockTestUserRepository::new();

        repository
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));

        let service = service(repository);

        let result = service.get_user(42).await;
        assert!(matches!(result.unwrap_err(), UserError::NotFound(42)));
    }

    #[tokio::test]
    async fn test_list_users() {
        let mut repository = MockTestUserRepository::new();

        repository.expect_list_all().times(1).returning(|| {
            Ok(vec![
                stored_user("ana", "pw1", Role::User),
                stored_user("bob", "pw2", Role::Admin),
            ])
        });

        let service = service(repository);

        let users = service.list_users().await.unwrap();
        assert_eq!(users.len(), 2);
    }
}
