use std::sync::Arc;
use uuid::Uuid;

use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::application::ports::outgoing::token_provider::TokenProvider;

pub const TEST_JWT_SECRET: &str = "test_secret_key_for_testing_purposes_only";

/// The administrator the default resolve stub admits.
pub const TEST_ADMIN_ID: Uuid = Uuid::from_u128(0x6f1c_2b7e_4d0a_4a35_9c11_5e2f_8b3d_a001);

pub fn token_provider() -> Arc<dyn TokenProvider + Send + Sync> {
    Arc::new(JwtTokenService::new(JwtConfig {
        secret_key: TEST_JWT_SECRET.to_string(),
        issuer: JwtConfig::DEFAULT_ISSUER.to_string(),
    }))
}

pub fn token_for(admin_id: Uuid) -> String {
    token_provider()
        .issue_token(admin_id)
        .expect("test token should be issued")
}

pub fn bearer_header() -> (&'static str, String) {
    ("Authorization", format!("Bearer {}", token_for(TEST_ADMIN_ID)))
}
