use async_trait::async_trait;

use crate::auth::application::domain::entities::{AdminProfile, NewAdmin};

#[derive(Debug, Clone, thiserror::Error)]
pub enum AdminRepositoryError {
    #[error("Username already exists")]
    UsernameAlreadyExists,

    #[error("Email already exists")]
    EmailAlreadyExists,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait AdminRepository: Send + Sync {
    async fn create_admin(&self, data: NewAdmin) -> Result<AdminProfile, AdminRepositoryError>;
}
