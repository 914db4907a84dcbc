//! Authentication utilities library
//!
//! Provides the authentication infrastructure for the catalog backend:
//! - Password digest hashing (legacy-compatible unsalted MD5 hex)
//! - JWT access token generation and validation
//! - Authentication coordination
//!
//! The service defines its own domain traits and adapts these
//! implementations, keeping token and digest handling out of the domain
//! layer.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let digest = hasher.hash("my_password");
//! assert_eq!(digest.len(), 32);
//! assert!(hasher.verify("my_password", &digest));
//! ```
//!
//! ## JWT Tokens
//! ```
//! use auth::{Claims, JwtHandler};
//!
//! let handler = JwtHandler::new(b"secret_key_at_least_32_bytes_long!").unwrap();
//! let claims = Claims::for_user("ana", "User", 7);
//! let token = handler.encode(&claims).unwrap();
//! let decoded = handler.decode(&token).unwrap();
//! assert_eq!(decoded.name, "ana");
//! ```
//!
//! ## Complete Authentication Flow
//! ```
//! use auth::{Authenticator, Claims};
//!
//! let auth = Authenticator::new(b"secret_key_at_least_32_bytes_long!").unwrap();
//!
//! // Register: hash password
//! let stored_hash = auth.hash_password("password123");
//!
//! // Login: verify and generate token
//! let claims = Claims::for_user("ana", "User", 7);
//! let result = auth.authenticate("password123", &stored_hash, &claims).unwrap();
//!
//! // Validate token
//! let decoded = auth.validate_token(&result.access_token).unwrap();
//! assert_eq!(decoded.role, "User");
//! ```

pub mod authenticator;
pub mod jwt;
pub mod password;

// Re-export commonly used items
pub use authenticator::AuthenticationError;
pub use authenticator::AuthenticationResult;
pub use authenticator::Authenticator;
pub use jwt::Claims;
pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use password::PasswordHasher;
