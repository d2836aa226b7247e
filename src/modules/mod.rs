pub mod auth;
pub mod education;
pub mod experience;
pub mod project;
pub mod skill;
