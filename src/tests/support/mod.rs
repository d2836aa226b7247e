pub mod app_state_builder;
pub mod auth_helper;
pub mod education_test_fixtures;
pub mod experience_test_fixtures;
pub mod mocks;
pub mod multipart;
pub mod project_test_fixtures;
pub mod skill_test_fixtures;
pub mod stubs;
