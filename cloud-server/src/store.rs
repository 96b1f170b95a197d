//! Credential store
//!
//! Configured passwords are hashed with Argon2 once at startup. Logins are
//! checked against the stored PHC strings.

use argon2::password_hash::{rand_core::OsRng, SaltString};
use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier};

#[derive(Debug)]
pub struct CredentialStore {
    /// `(username, PHC hash)`
    users: Vec<(String, String)>,
}

impl CredentialStore {
    pub fn new(credentials: &[(String, String)]) -> Result<Self, argon2::password_hash::Error> {
        let argon2 = Argon2::default();
        let users = credentials
            .iter()
            .map(|(user, pass)| {
                let salt = SaltString::generate(&mut OsRng);
                let hash = argon2.hash_password(pass.as_bytes(), &salt)?.to_string();
                Ok((user.clone(), hash))
            })
            .collect::<Result<Vec<_>, argon2::password_hash::Error>>()?;

        Ok(Self { users })
    }

    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    /// True when `username` exists and `password` matches
    pub fn verify(&self, username: &str, password: &str) -> bool {
        let Some((_, hash)) = self.users.iter().find(|(user, _)| user == username) else {
            return false;
        };

        match PasswordHash::new(hash) {
            Ok(parsed) => Argon2::default()
                .verify_password(password.as_bytes(), &parsed)
                .is_ok(),
            Err(e) => {
                tracing::error!("Stored hash for {} is unreadable: {}", username, e);
                false
            }
        }
    }
}
