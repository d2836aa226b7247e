use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::OnceCell;
use tracing::{info, warn};

use crate::auth::application::ports::incoming::use_cases::{
    LoginAdminUseCase, LoginError, LoginRequest, LoginResult,
};
use crate::auth::application::ports::outgoing::{AdminQuery, PasswordHasher, TokenProvider};

const DUMMY_PASSWORD: &str = "portfolio-login-timing-equalizer";

pub struct LoginAdminService<Q>
where
    Q: AdminQuery,
{
    admin_query: Q,
    password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
    token_provider: Arc<dyn TokenProvider + Send + Sync>,
    dummy_hash: OnceCell<String>,
}

impl<Q> LoginAdminService<Q>
where
    Q: AdminQuery,
{
    pub fn new(
        admin_query: Q,
        password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
        token_provider: Arc<dyn TokenProvider + Send + Sync>,
    ) -> Self {
        Self {
            admin_query,
            password_hasher,
            token_provider,
            dummy_hash: OnceCell::new(),
        }
    }

    /// Runs a verification whose result is discarded, so an unknown email costs
    /// the same as a wrong password.
    async fn verify_against_dummy(&self, password: &str) {
        let dummy = self
            .dummy_hash
            .get_or_try_init(|| async { self.password_hasher.hash_password(DUMMY_PASSWORD).await })
            .await;

        if let Ok(hash) = dummy {
            let _ = self.password_hasher.verify_password(password, hash).await;
        }
    }
}

#[async_trait]
impl<Q> LoginAdminUseCase for LoginAdminService<Q>
where
    Q: AdminQuery + Send + Sync,
{
    async fn execute(&self, request: LoginRequest) -> Result<LoginResult, LoginError> {
        let admin = self
            .admin_query
            .find_by_email(request.email())
            .await
            .map_err(|e| LoginError::QueryError(e.to_string()))?;

        let Some(admin) = admin else {
            self.verify_against_dummy(request.password()).await;
            warn!("Login rejected: unknown email");
            return Err(LoginError::InvalidCredentials);
        };

        let matches = self
            .password_hasher
            .verify_password(request.password(), &admin.password_hash)
            .await
            .map_err(|e| LoginError::PasswordVerificationFailed(e.to_string()))?;

        if !matches {
            warn!(admin_id = %admin.id, "Login rejected: wrong password");
            return Err(LoginError::InvalidCredentials);
        }

        let token = self
            .token_provider
            .issue_token(admin.id)
            .map_err(|e| LoginError::TokenGenerationFailed(e.to_string()))?;

        info!(admin_id = %admin.id, "Administrator logged in");

        Ok(LoginResult {
            username: admin.username,
            email: admin.email,
            token,
        })
    }
}
