use async_trait::async_trait;

use super::{Argon2Hasher, BcryptHasher};
use crate::auth::application::ports::outgoing::password_hasher::{HashError, PasswordHasher};

/// Hashes with Argon2id; verifies Argon2 hashes and legacy bcrypt hashes
/// (`$2a$`, `$2b$`, `$2y$`).
#[derive(Clone)]
pub struct LegacyAwareHasher {
    argon2: Argon2Hasher,
    bcrypt: BcryptHasher,
}

impl LegacyAwareHasher {
    pub fn new(argon2: Argon2Hasher) -> Self {
        Self {
            argon2,
            bcrypt: BcryptHasher::default(),
        }
    }

    fn is_bcrypt(hash: &str) -> bool {
        hash.starts_with("$2a$") || hash.starts_with("$2b$") || hash.starts_with("$2y$")
    }
}

#[async_trait]
impl PasswordHasher for LegacyAwareHasher {
    async fn hash_password(&self, password: &str) -> Result<String, HashError> {
        self.argon2.hash_password(password).await
    }

    async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, HashError> {
        if Self::is_bcrypt(hash) {
            self.bcrypt.verify_password(password, hash).await
        } else {
            self.argon2.verify_password(password, hash).await
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::adapter::outgoing::security::Argon2Params;

    fn hasher() -> LegacyAwareHasher {
        LegacyAwareHasher::new(
            Argon2Hasher::new(Argon2Params {
                memory_kib: 1024,
                iterations: 1,
                parallelism: 1,
            })
            .unwrap(),
        )
    }

    #[tokio::test]
    async fn test_new_hashes_are_argon2() {
        let hash = hasher().hash_password("secret1").await.unwrap();
        assert!(hash.starts_with("$argon2id$"));
        assert!(hasher().verify_password("secret1", &hash).await.unwrap());
    }

    #[tokio::test]
    async fn test_legacy_bcrypt_hash_still_verifies() {
        let legacy = BcryptHasher::new(4).hash_password("secret1").await.unwrap();

        assert!(hasher().verify_password("secret1", &legacy).await.unwrap());
        assert!(!hasher().verify_password("secret2", &legacy).await.unwrap());
    }
}
