use argon2::{Argon2, PasswordHash, PasswordVerifier, password_hash::SaltString};

use rosterdav_core::error::CoreError;

use crate::error::DavResult;

/// External credential check.
///
/// The adapter never interprets the stored hash itself; it hands the hash
/// (when one exists) and the presented secret to this collaborator.
/// Implementations must take comparable time whether or not a hash exists.
pub trait SecretVerifier {
    /// Returns true only when `secret` matches `stored_hash`. `None` means
    /// the looked-up member does not exist or carries no hash; the check
    /// still runs against a dummy so the two outcomes are not
    /// distinguishable by timing.
    fn check(&self, stored_hash: Option<&str>, secret: &str) -> bool;
}

/// Argon2id verification against PHC-format hashes.
#[derive(Debug, Clone, Copy, Default)]
pub struct Argon2Verifier;

/// Well-formed Argon2id hash that matches no password; verified when no real
/// hash is available.
const DUMMY_HASH: &str = "$argon2id$v=19$m=19456,t=2,p=1$c2FsdHNhbHRzYWx0c2FsdA$AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA";

impl Argon2Verifier {
    fn verify(hash: &str, secret: &str) -> bool {
        let Ok(parsed) = PasswordHash::new(hash) else {
            return false;
        };
        Argon2::default()
            .verify_password(secret.as_bytes(), &parsed)
            .is_ok()
    }
}

impl SecretVerifier for Argon2Verifier {
    fn check(&self, stored_hash: Option<&str>, secret: &str) -> bool {
        match stored_hash {
            Some(hash) if PasswordHash::new(hash).is_ok() => Self::verify(hash, secret),
            // No hash, or an unparseable one: burn the dummy verification,
            // then fail.
            _ => {
                let _burned = Self::verify(DUMMY_HASH, secret);
                false
            }
        }
    }
}

/// ## Summary
/// Hashes a password using Argon2id with a random salt. Fixture and
/// provisioning helper; the adapter itself never writes hashes.
///
/// ## Errors
/// Returns an error if password hashing fails.
pub fn hash_password(password: &str) -> DavResult<String> {
    use argon2::PasswordHasher;
    use argon2::password_hash::rand_core::OsRng;

    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    let password_hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| CoreError::ValidationError(format!("Failed to hash password: {e}")))?;

    Ok(password_hash.to_string())
}
