use async_trait::async_trait;

use crate::auth::application::ports::outgoing::password_hasher::{HashError, PasswordHasher};

use super::{argon2_hasher::Argon2Hasher, bcrypt_hasher::BcryptHasher};

pub fn is_bcrypt_hash(hash: &str) -> bool {
    hash.starts_with("$2")
}

/// Hashes with argon2id and verifies against either argon2 or bcrypt hashes,
/// picked from the stored hash prefix.
#[derive(Clone)]
pub struct FormatAwareHasher {
    argon2: Argon2Hasher,
    bcrypt: BcryptHasher,
}

impl FormatAwareHasher {
    pub fn new(argon2: Argon2Hasher) -> Self {
        Self {
            argon2,
            bcrypt: BcryptHasher,
        }
    }
}

#[async_trait]
impl PasswordHasher for FormatAwareHasher {
    async fn hash_password(&self, password: &str) -> Result<String, HashError> {
        self.argon2.hash_password(password).await
    }

    async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, HashError> {
        if is_bcrypt_hash(hash) {
            self.bcrypt.verify_password(password, hash).await
        } else {
            self.argon2.verify_password(password, hash).await
        }
    }
}
