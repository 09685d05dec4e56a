use anyhow::anyhow;
use argon2::password_hash::{PasswordHash, SaltString, rand_core::OsRng};
use argon2::{Argon2, PasswordHasher as _, PasswordVerifier as _};

use crate::domain::repository::PasswordHasher;
use crate::error::AuthServiceError;

/// Argon2id with the crate's default parameters, PHC string output. Hashing runs on
/// tokio's blocking pool.
#[derive(Debug, Clone, Copy, Default)]
pub struct Argon2Hasher;

fn hash_blocking(plain: &str) -> anyhow::Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(plain.as_bytes(), &salt)
        .map_err(|e| anyhow!("hash password: {e}"))?;
    Ok(hash.to_string())
}

fn verify_blocking(plain: &str, hash: &str) -> anyhow::Result<bool> {
    let parsed = PasswordHash::new(hash).map_err(|e| anyhow!("parse password hash: {e}"))?;
    Ok(Argon2::default()
        .verify_password(plain.as_bytes(), &parsed)
        .is_ok())
}

impl PasswordHasher for Argon2Hasher {
    async fn hash(&self, plain: &str) -> Result<String, AuthServiceError> {
        let plain = plain.to_owned();
        let hash = tokio::task::spawn_blocking(move || hash_blocking(&plain))
            .await
            .map_err(|e| anyhow!("password hash task: {e}"))??;
        Ok(hash)
    }

    async fn verify(&self, plain: &str, hash: &str) -> Result<bool, AuthServiceError> {
        let plain = plain.to_owned();
        let hash = hash.to_owned();
        let matches = tokio::task::spawn_blocking(move || verify_blocking(&plain, &hash))
            .await
            .map_err(|e| anyhow!("password verify task: {e}"))??;
        Ok(matches)
    }
}
