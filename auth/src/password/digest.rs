use md5::Digest;
use md5::Md5;

/// Password digest implementation.
///
/// Produces the lowercase hexadecimal MD5 digest of the password's UTF-8
/// bytes: deterministic, unsalted, 32 characters. This is the credential
/// format already present in the user store, so existing hashes keep
/// verifying.
///
/// # Security Notes
/// An unsalted fast digest is unsuitable for a new credential store; it is
/// kept only for compatibility with already-persisted records. Migrating
/// stored credentials to a salted KDF invalidates every existing hash, so
/// it has to happen through a rehash-on-login pass, not here.
pub struct PasswordHasher;

impl PasswordHasher {
    /// Create a new password hasher instance.
    pub fn new() -> Self {
        Self
    }

    /// Hash a plaintext password.
    ///
    /// Deterministic: the same input always yields the same digest.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to hash
    ///
    /// # Returns
    /// 32-character lowercase hexadecimal digest
    pub fn hash(&self, password: &str) -> String {
        hex::encode(Md5::digest(password.as_bytes()))
    }

    /// Verify a password against a stored digest.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to verify
    /// * `stored` - Stored lowercase hex digest
    ///
    /// # Returns
    /// True if the password digests to `stored`
    pub fn verify(&self, password: &str, stored: &str) -> bool {
        self.hash(password) == stored
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_is_deterministic_lowercase_hex() {
        let hasher = PasswordHasher::new();

        let digest = hasher.hash("secret1");
        assert_eq!(digest, hasher.hash("secret1"));
        assert_eq!(digest.len(), 32);
        assert!(digest
            .chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
    }

    #[test]
    fn test_hash_known_vectors() {
        let hasher = PasswordHasher::new();

        assert_eq!(hasher.hash("abc"), "900150983cd24fb0d6963f7d28e17f72");
        assert_eq!(hasher.hash("secret1"), "e52d98c459819a11775936d8dfbb7929");
    }

    #[test]
    fn test_hash_and_verify() {
        let hasher = PasswordHasher::new();
        let password = "my_secure_password";

        let digest = hasher.hash(password);

        assert!(hasher.verify(password, &digest));
        assert!(!hasher.verify("wrong_password", &digest));
    }

    #[test]
    fn test_verify_rejects_uppercase_digest() {
        let hasher = PasswordHasher::new();
        let digest = hasher.hash("abc").to_uppercase();

        // Stored digests are lowercase; comparison is exact.
        assert!(!hasher.verify("abc", &digest));
    }
}
