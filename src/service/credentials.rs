use crate::models::user::User;
use sha2::{Digest, Sha256};
use uuid::Uuid;

/// SHA-256 of `secret`, lowercase hex.
pub fn hash_secret(secret: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(secret.as_bytes());
    hex::encode(hasher.finalize())
}

pub fn hash_password(password: &str, salt: &str) -> String {
    hash_secret(&format!("{}{}", password, salt))
}

/// A fresh per-user salt, stored in clear next to the hash.
pub fn generate_salt() -> String {
    Uuid::new_v4().to_string()
}

/// Returns a new `(hash, salt)` pair for `password`.
pub fn new_credentials(password: &str) -> (String, String) {
    let salt = generate_salt();
    (hash_password(password, &salt), salt)
}

pub fn verify_password(user: &User, password: &str) -> bool {
    let candidate = hash_password(password, &user.pass_salt);
    constant_time_eq(candidate.as_bytes(), user.pass_hash.as_bytes())
}

/// Byte comparison whose timing does not depend on where the inputs differ.
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}
