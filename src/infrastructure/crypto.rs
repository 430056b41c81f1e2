//! Password hashing for local accounts.
//!
//! A single salted SHA-256 with no key stretching. This is fast to brute
//! force and only suitable for a single-site desktop deployment; swap in a
//! memory-hard KDF (argon2, scrypt) before exposing these hashes anywhere.

use rand::RngCore;
use sha2::{Digest, Sha256};

/// Number of random bytes behind each salt (16 hex characters).
const SALT_BYTES: usize = 8;

/// Generate a fresh salt from the thread-local CSPRNG, hex encoded.
#[must_use]
pub fn generate_salt() -> String {
    let mut bytes = [0u8; SALT_BYTES];
    rand::thread_rng().fill_bytes(&mut bytes);
    hex::encode(bytes)
}

/// Hex-encoded `SHA-256(password || salt)`.
#[must_use]
pub fn hash_password(password: &str, salt: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(password.as_bytes());
    hasher.update(salt.as_bytes());
    hex::encode(hasher.finalize())
}

/// Recompute the hash for `password` and compare it with `expected_hash`.
#[must_use]
pub fn verify_password(password: &str, salt: &str, expected_hash: &str) -> bool {
    hash_password(password, salt) == expected_hash
}
