use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::{AdminProfile, AdminRecord};

#[derive(Debug, Clone, thiserror::Error)]
pub enum AdminQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait AdminQuery: Send + Sync {
    /// `email` must already be normalized.
    async fn find_by_email(&self, email: &str) -> Result<Option<AdminRecord>, AdminQueryError>;
    async fn find_by_id(&self, admin_id: Uuid) -> Result<Option<AdminProfile>, AdminQueryError>;
}
