use async_trait::async_trait;
use email_address::EmailAddress;
use std::sync::Arc;

use crate::auth::application::domain::entities::{normalize_email, AdminProfile, NewAdmin};
use crate::auth::application::ports::incoming::use_cases::{
    SeedAdminError, SeedAdminRequest, SeedAdminUseCase,
};
use crate::auth::application::ports::outgoing::{
    AdminRepository, AdminRepositoryError, PasswordHasher,
};

pub const MIN_PASSWORD_LEN: usize = 6;
/// Matches the width of `admins.username`.
pub const MAX_USERNAME_LEN: usize = 50;

pub struct SeedAdminService<R>
where
    R: AdminRepository,
{
    admin_repository: R,
    password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
}

impl<R> SeedAdminService<R>
where
    R: AdminRepository,
{
    pub fn new(admin_repository: R, password_hasher: Arc<dyn PasswordHasher + Send + Sync>) -> Self {
        Self {
            admin_repository,
            password_hasher,
        }
    }
}

#[async_trait]
impl<R> SeedAdminUseCase for SeedAdminService<R>
where
    R: AdminRepository + Send + Sync,
{
    async fn execute(&self, request: SeedAdminRequest) -> Result<AdminProfile, SeedAdminError> {
        let username = request.username.trim().to_string();
        if username.is_empty() {
            return Err(SeedAdminError::EmptyUsername);
        }
        if username.chars().count() > MAX_USERNAME_LEN {
            return Err(SeedAdminError::UsernameTooLong(MAX_USERNAME_LEN));
        }

        let email = normalize_email(&request.email);
        if !EmailAddress::is_valid(&email) {
            return Err(SeedAdminError::InvalidEmail);
        }

        if request.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(SeedAdminError::PasswordTooShort(MIN_PASSWORD_LEN));
        }

        let password_hash = self
            .password_hasher
            .hash_password(&request.password)
            .await
            .map_err(|e| SeedAdminError::HashError(e.to_string()))?;

        self.admin_repository
            .create_admin(NewAdmin {
                username,
                email,
                password_hash,
            })
            .await
            .map_err(|e| match e {
                AdminRepositoryError::UsernameAlreadyExists => SeedAdminError::UsernameTaken,
                AdminRepositoryError::EmailAlreadyExists => SeedAdminError::EmailTaken,
                AdminRepositoryError::DatabaseError(msg) => SeedAdminError::RepositoryError(msg),
            })
    }
}
