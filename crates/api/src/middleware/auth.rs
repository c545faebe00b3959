//! # Authentication Module
//!
//! Authentication primitives for the Availo API: password hashing and
//! verification with Argon2, and HS256 JWT issuance and decoding for access
//! and refresh tokens. The signing secret comes from [`crate::config::ApiConfig`];
//! nothing here reads process globals.

use argon2::{
    password_hash::{rand_core::OsRng, SaltString},
    Argon2, PasswordHash, PasswordHasher, PasswordVerifier,
};
use chrono::{Duration, Utc};
use eyre::{eyre, Result};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

/// Hashes a password using the Argon2 algorithm.
///
/// Generates a random salt per call and returns the hash in PHC string
/// format (algorithm, version, parameters, salt, and hash).
pub fn hash_password(password: &str) -> Result<String> {
    // Generate a fresh, random salt
    let salt = SaltString::generate(&mut OsRng);

    let argon2 = Argon2::default();

    let password_hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| eyre!("Error hashing password: {}", e))?
        .to_string();

    Ok(password_hash)
}

/// Verifies a password against a stored PHC-format hash.
///
/// Argon2's verification is constant-time over the hash comparison, so a
/// mismatch and a match take indistinguishable time.
pub fn verify_password(password: &str, stored_hash: &str) -> Result<bool> {
    let parsed_hash =
        PasswordHash::new(stored_hash).map_err(|e| eyre!("Invalid password hash: {}", e))?;
    let is_valid = Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok();

    Ok(is_valid)
}

/// JWT payload carried by access and refresh tokens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the user id the token was issued for.
    pub sub: String,
    /// Expiry as a Unix timestamp.
    pub exp: usize,
}

/// Issues an HS256 token for `subject` expiring after `ttl`.
pub fn issue_token(secret: &str, subject: &str, ttl: Duration) -> Result<String> {
    let expiry = Utc::now() + ttl;
    let claims = Claims {
        sub: subject.to_string(),
        exp: expiry.timestamp() as usize,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| eyre!("Error signing token: {}", e))
}

/// Decodes and validates an HS256 token, rejecting expired signatures.
pub fn decode_token(secret: &str, token: &str) -> Result<Claims> {
    let mut validation = Validation::default();
    validation.leeway = 0;

    let data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map_err(|e| eyre!("Invalid token: {}", e))?;

    Ok(data.claims)
}
