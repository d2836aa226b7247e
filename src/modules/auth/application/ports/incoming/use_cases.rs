use async_trait::async_trait;
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::auth::application::domain::entities::{normalize_email, AdminProfile};

// ========================= Login =========================

/// Login credentials with both fields guaranteed present.
#[derive(Clone)]
pub struct LoginRequest {
    email: String,
    password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("All fields are required")]
pub struct MissingCredentials;

impl LoginRequest {
    pub fn new(email: Option<String>, password: Option<String>) -> Result<Self, MissingCredentials> {
        let email = email
            .map(|e| normalize_email(&e))
            .filter(|e| !e.is_empty())
            .ok_or(MissingCredentials)?;

        let password = password
            .filter(|p| !p.trim().is_empty())
            .ok_or(MissingCredentials)?;

        Ok(Self { email, password })
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

impl std::fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginRequest")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum LoginError {
    /// Unknown email and wrong password are deliberately indistinguishable.
    #[error("Incorrect Email or Password.")]
    InvalidCredentials,

    #[error("Password verification failed: {0}")]
    PasswordVerificationFailed(String),

    #[error("Token generation failed: {0}")]
    TokenGenerationFailed(String),

    #[error("Query error: {0}")]
    QueryError(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct LoginResult {
    pub username: String,
    pub email: String,
    pub token: String,
}

#[async_trait]
pub trait LoginAdminUseCase: Send + Sync {
    async fn execute(&self, request: LoginRequest) -> Result<LoginResult, LoginError>;
}

// ========================= Resolve admin =========================

#[derive(Debug, Clone, thiserror::Error)]
pub enum ResolveAdminError {
    #[error("Administrator not found")]
    NotFound,

    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait ResolveAdminUseCase: Send + Sync {
    async fn execute(&self, admin_id: Uuid) -> Result<AdminProfile, ResolveAdminError>;
}

// ========================= Seed admin =========================

#[derive(Clone)]
pub struct SeedAdminRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SeedAdminError {
    #[error("Username cannot be empty")]
    EmptyUsername,

    #[error("Username must be at most {0} characters")]
    UsernameTooLong(usize),

    #[error("Invalid email format")]
    InvalidEmail,

    #[error("Password must be at least {0} characters long")]
    PasswordTooShort(usize),

    #[error("An administrator with this username already exists")]
    UsernameTaken,

    #[error("An administrator with this email already exists")]
    EmailTaken,

    #[error("Password hashing failed: {0}")]
    HashError(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait SeedAdminUseCase: Send + Sync {
    async fn execute(&self, request: SeedAdminRequest) -> Result<AdminProfile, SeedAdminError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_request_normalizes_email() {
        let req = LoginRequest::new(
            Some("  Admin@Example.com ".to_string()),
            Some(" secret ".to_string()),
        )
        .unwrap();

        assert_eq!(req.email(), "admin@example.com");
        // Passwords are compared verbatim.
        assert_eq!(req.password(), " secret ");
    }

    #[test]
    fn test_login_request_requires_both_fields() {
        assert_eq!(
            LoginRequest::new(None, Some("pw".to_string())).unwrap_err(),
            MissingCredentials
        );
        assert_eq!(
            LoginRequest::new(Some("a@b.c".to_string()), Some("   ".to_string())).unwrap_err(),
            MissingCredentials
        );
        assert_eq!(
            LoginRequest::new(Some(" ".to_string()), Some("pw".to_string()))
                .unwrap_err()
                .to_string(),
            "All fields are required"
        );
    }

    #[test]
    fn test_login_request_debug_hides_password() {
        let req = LoginRequest::new(Some("a@b.c".to_string()), Some("hunter22".to_string())).unwrap();
        assert!(!format!("{:?}", req).contains("hunter22"));
    }
}
