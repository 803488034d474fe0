use argon2::{Argon2, PasswordHasher};
use async_trait::async_trait;
use password_hash::{PasswordHash, PasswordVerifier, SaltString, rand_core::OsRng};
use tokio::task;

use crate::domain::ports::CredentialHasher;

// Argon2id hasher with a fresh random salt per password. Both operations run
// on the blocking pool; a single call takes tens of milliseconds.
#[derive(Clone, Copy, Default)]
pub struct Argon2Hasher;

fn hash_blocking(password: &str) -> Result<String, String> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|err| err.to_string())
}

fn verify_blocking(password: &str, hash: &str) -> Result<bool, String> {
    let parsed = PasswordHash::new(hash).map_err(|err| err.to_string())?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}

#[async_trait]
impl CredentialHasher for Argon2Hasher {
    async fn hash(&self, password: &str) -> Result<String, String> {
        let password = password.to_owned();
        task::spawn_blocking(move || hash_blocking(&password))
            .await
            .map_err(|err| err.to_string())?
    }

    async fn verify(&self, password: &str, hash: &str) -> Result<bool, String> {
        let password = password.to_owned();
        let hash = hash.to_owned();
        task::spawn_blocking(move || verify_blocking(&password, &hash))
            .await
            .map_err(|err| err.to_string())?
    }
}
