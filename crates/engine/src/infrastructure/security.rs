//! Argon2id password hashing adapter.

use argon2::password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;

use crate::infrastructure::ports::{CredentialError, PasswordHasherPort};

/// Hashes passwords with Argon2id and a per-password random salt, producing
/// PHC strings (`$argon2id$...`).
#[derive(Default)]
pub struct Argon2PasswordHasher;

impl Argon2PasswordHasher {
    pub fn new() -> Self {
        Self
    }
}

impl PasswordHasherPort for Argon2PasswordHasher {
    fn hash(&self, password: &str) -> Result<String, CredentialError> {
        let salt = SaltString::generate(&mut OsRng);
        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| CredentialError::Hashing(e.to_string()))
    }

    fn verify(&self, password: &str, stored_hash: &str) -> bool {
        let Ok(parsed) = PasswordHash::new(stored_hash) else {
            // A corrupted stored hash must fail closed as a mismatch.
            return false;
        };
        Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_then_verify_round_trips() {
        let hasher = Argon2PasswordHasher::new();
        let hash = hasher.hash("correct horse").expect("hashing succeeds");
        assert!(hash.starts_with("$argon2id$"));
        assert!(hasher.verify("correct horse", &hash));
    }

    #[test]
    fn wrong_password_does_not_verify() {
        let hasher = Argon2PasswordHasher::new();
        let hash = hasher.hash("correct horse").expect("hashing succeeds");
        assert!(!hasher.verify("battery staple", &hash));
    }

    #[test]
    fn two_hashes_of_the_same_password_differ() {
        let hasher = Argon2PasswordHasher::new();
        let first = hasher.hash("secret123").expect("hashing succeeds");
        let second = hasher.hash("secret123").expect("hashing succeeds");
        assert_ne!(first, second);
    }

    #[test]
    fn malformed_stored_hash_verifies_false() {
        let hasher = Argon2PasswordHasher::new();
        assert!(!hasher.verify("anything", "not-a-phc-string"));
        assert!(!hasher.verify("anything", ""));
    }
}
