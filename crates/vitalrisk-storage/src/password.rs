use sha2::{Digest, Sha256};

/// Hex SHA-256 of the password.
///
/// No salt and no work factor: two accounts with the same password share a
/// hash. Kept for compatibility with existing `users` rows.
pub fn hash_password(password: &str) -> String {
    hex::encode(Sha256::digest(password.as_bytes()))
}

pub fn verify_password(password: &str, hash: &str) -> bool {
    hash_password(password) == hash
}
