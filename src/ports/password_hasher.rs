//! Password hashing port.
//!
//! Hashing is CPU-bound and synchronous; async callers move it onto the
//! blocking pool (`tokio::task::spawn_blocking`).

use secrecy::SecretString;

use crate::domain::foundation::DomainError;
use crate::domain::user::HashedPassword;

/// Hashes and verifies passwords.
pub trait PasswordHasher: Send + Sync {
    /// Hash a plain password with a fresh salt.
    ///
    /// # Errors
    ///
    /// - `InternalError` if the hashing primitive fails
    fn hash(&self, password: &SecretString) -> Result<HashedPassword, DomainError>;

    /// Check a plain password against a stored hash.
    ///
    /// Returns `Ok(false)` on mismatch.
    ///
    /// # Errors
    ///
    /// - `InternalError` if the stored hash cannot be parsed
    fn verify(&self, password: &SecretString, hash: &HashedPassword) -> Result<bool, DomainError>;

    /// A valid hash that matches no real password. Verifying against it costs
    /// the same as a real check.
    fn dummy_hash(&self) -> HashedPassword;
}
