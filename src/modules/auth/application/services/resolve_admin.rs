use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::AdminProfile;
use crate::auth::application::ports::incoming::use_cases::{
    ResolveAdminError, ResolveAdminUseCase,
};
use crate::auth::application::ports::outgoing::AdminQuery;

/// Turns a token subject back into the administrator it names.
pub struct ResolveAdminService<Q>
where
    Q: AdminQuery,
{
    admin_query: Q,
}

impl<Q> ResolveAdminService<Q>
where
    Q: AdminQuery,
{
    pub fn new(admin_query: Q) -> Self {
        Self { admin_query }
    }
}

#[async_trait]
impl<Q> ResolveAdminUseCase for ResolveAdminService<Q>
where
    Q: AdminQuery + Send + Sync,
{
    async fn execute(&self, admin_id: Uuid) -> Result<AdminProfile, ResolveAdminError> {
        self.admin_query
            .find_by_id(admin_id)
            .await
            .map_err(|e| ResolveAdminError::QueryError(e.to_string()))?
            .ok_or(ResolveAdminError::NotFound)
    }
}
