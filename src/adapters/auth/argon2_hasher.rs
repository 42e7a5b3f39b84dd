//! Argon2id implementation of the `PasswordHasher` port.

use argon2::password_hash::{PasswordHash, PasswordHasher as _, PasswordVerifier, SaltString};
use argon2::{Algorithm, Argon2, Params, Version};
use secrecy::{ExposeSecret, SecretString};

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::user::HashedPassword;
use crate::ports::PasswordHasher;

/// Hash of a random string nobody knows, produced with the default params.
const DUMMY_HASH: &str = "$argon2id$v=19$m=15000,t=2,p=1$gZiV/M1gPc22ElAH/Jh1Hw$CWOrkoo7oJBQ/iyh7uJ0LO2aLEfrHwTWllSAxT0zRno";

/// Argon2id hasher.
#[derive(Debug, Clone)]
pub struct Argon2PasswordHasher {
    params: Params,
}

impl Argon2PasswordHasher {
    /// Hasher with the production cost parameters (15 MiB, 2 passes).
    pub fn new() -> Self {
        Self::with_params(15000, 2, 1)
    }

    /// Hasher with explicit cost parameters, mainly for cheap test hashing.
    ///
    /// Falls back to argon2's defaults if the parameters are rejected.
    pub fn with_params(memory_kib: u32, iterations: u32, parallelism: u32) -> Self {
        let params = Params::new(memory_kib, iterations, parallelism, None)
            .unwrap_or_else(|_| Params::default());
        Self { params }
    }

    fn argon2(&self) -> Argon2<'static> {
        Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone())
    }
}

impl Default for Argon2PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}

impl PasswordHasher for Argon2PasswordHasher {
    fn hash(&self, password: &SecretString) -> Result<HashedPassword, DomainError> {
        let salt = SaltString::generate(&mut rand::thread_rng());
        let hash = self
            .argon2()
            .hash_password(password.expose_secret().as_bytes(), &salt)
            .map_err(|e| {
                DomainError::new(
                    ErrorCode::InternalError,
                    format!("Failed to hash password: {}", e),
                )
            })?;
        Ok(HashedPassword::from_phc(hash.to_string()))
    }

    fn verify(&self, password: &SecretString, hash: &HashedPassword) -> Result<bool, DomainError> {
        let parsed = PasswordHash::new(hash.as_str()).map_err(|e| {
            DomainError::new(
                ErrorCode::InternalError,
                format!("Stored password hash is invalid: {}", e),
            )
        })?;

        // Params are read from the PHC string, so hashes made with other
        // costs still verify.
        match self
            .argon2()
            .verify_password(password.expose_secret().as_bytes(), &parsed)
        {
            Ok(()) => Ok(true),
            Err(argon2::password_hash::Error::Password) => Ok(false),
            Err(e) => Err(DomainError::new(
                ErrorCode::InternalError,
                format!("Failed to verify password: {}", e),
            )),
        }
    }

    fn dummy_hash(&self) -> HashedPassword {
        HashedPassword::from_phc(DUMMY_HASH)
    }
}
