use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::AdminProfile;
use crate::auth::application::ports::incoming::use_cases::{
    LoginAdminUseCase, LoginError, LoginRequest, LoginResult, ResolveAdminError,
    ResolveAdminUseCase,
};

#[derive(Clone)]
pub struct StubLoginAdminUseCase {
    result: Result<LoginResult, LoginError>,
}

impl StubLoginAdminUseCase {
    pub fn success(username: &str, email: &str, token: &str) -> Self {
        Self {
            result: Ok(LoginResult {
                username: username.to_string(),
                email: email.to_string(),
                token: token.to_string(),
            }),
        }
    }

    pub fn error(error: LoginError) -> Self {
        Self { result: Err(error) }
    }
}

#[async_trait]
impl LoginAdminUseCase for StubLoginAdminUseCase {
    async fn execute(&self, _request: LoginRequest) -> Result<LoginResult, LoginError> {
        self.result.clone()
    }
}

#[derive(Clone)]
pub struct StubResolveAdminUseCase {
    result: Result<AdminProfile, ResolveAdminError>,
}

impl StubResolveAdminUseCase {
    /// Admits any token subject as the given administrator.
    pub fn found(id: Uuid, username: &str) -> Self {
        Self {
            result: Ok(AdminProfile {
                id,
                username: username.to_string(),
                email: format!("{username}@example.com"),
            }),
        }
    }

    pub fn not_found() -> Self {
        Self {
            result: Err(ResolveAdminError::NotFound),
        }
    }

    pub fn failing() -> Self {
        Self {
            result: Err(ResolveAdminError::QueryError("connection refused".to_string())),
        }
    }
}

#[async_trait]
impl ResolveAdminUseCase for StubResolveAdminUseCase {
    async fn execute(&self, _admin_id: Uuid) -> Result<AdminProfile, ResolveAdminError> {
        self.result.clone()
    }
}
