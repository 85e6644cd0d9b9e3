/**
 * Password Hashing
 *
 * bcrypt hashing and verification. Each hash embeds its own random salt
 * and cost, so no separate salt column is needed. The cost comes from
 * configuration and is never influenced by a request.
 *
 * bcrypt is slow, so the async wrappers move the work onto
 * tokio's blocking pool instead of stalling a runtime worker.
 */

use crate::backend::error::BackendError;

/// Minimum accepted password length, in characters
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Longest password bcrypt reads in full, in bytes
pub const MAX_PASSWORD_BYTES: usize = 72;

/// Hash a password with the given cost
///
/// Fails instead of truncating a password longer than
/// [`MAX_PASSWORD_BYTES`].
pub fn hash_password(plaintext: &str, cost: u32) -> Result<String, bcrypt::BcryptError> {
    bcrypt::non_truncating_hash(plaintext, cost)
}

/// Check a password against a stored hash
///
/// Returns `false` for a wrong password, for a password too long to
/// have been hashed, and for a hash that cannot be parsed; never fails.
pub fn verify_password(plaintext: &str, hash: &str) -> bool {
    bcrypt::non_truncating_verify(plaintext, hash).unwrap_or(false)
}

/// Password hasher bound to a work factor
#[derive(Clone)]
pub struct PasswordHasher {
    cost: u32,
    dummy_hash: String,
}

impl std::fmt::Debug for PasswordHasher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PasswordHasher")
            .field("cost", &self.cost)
            .finish_non_exhaustive()
    }
}

impl PasswordHasher {
    /// Create a hasher with the given bcrypt cost
    ///
    /// Computes one throwaway hash at the same cost, on the blocking
    /// pool, used to equalise the work done when a login names an
    /// unknown email.
    pub async fn new(cost: u32) -> Result<Self, BackendError> {
        let mut hasher = Self {
            cost,
            dummy_hash: String::new(),
        };
        hasher.dummy_hash = hasher.hash("recordbook-dummy-password".to_string()).await?;
        Ok(hasher)
    }

    /// The bcrypt cost used for new hashes
    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// Hash a password on the blocking pool
    pub async fn hash(&self, plaintext: String) -> Result<String, BackendError> {
        let cost = self.cost;
        tokio::task::spawn_blocking(move || hash_password(&plaintext, cost))
            .await
            .map_err(|e| BackendError::internal(format!("hashing task failed: {}", e)))?
            .map_err(BackendError::from)
    }

    /// Verify a password on the blocking pool
    pub async fn verify(&self, plaintext: String, hash: String) -> bool {
        match tokio::task::spawn_blocking(move || verify_password(&plaintext, &hash)).await {
            Ok(valid) => valid,
            Err(e) => {
                tracing::error!("Password verification task failed: {}", e);
                false
            }
        }
    }

    /// Burn one verification's worth of work and report failure
    pub async fn verify_dummy(&self, plaintext: String) -> bool {
        let _ = self.verify(plaintext, self.dummy_hash.clone()).await;
        false
    }
}
