use std::sync::Arc;

use crate::auth::application::ports::incoming::use_cases::{
    LoginAdminUseCase, ResolveAdminUseCase,
};

#[derive(Clone)]
pub struct AuthUseCases {
    pub login: Arc<dyn LoginAdminUseCase + Send + Sync>,
    pub resolve_admin: Arc<dyn ResolveAdminUseCase + Send + Sync>,
}
