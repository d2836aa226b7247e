pub mod create_project;
pub mod delete_project;
pub mod get_project;
pub mod get_projects;
mod project_form;
pub mod update_project;

pub use create_project::create_project_handler;
pub use delete_project::delete_project_handler;
pub use get_project::get_project_handler;
pub use get_projects::get_projects_handler;
pub use project_form::ProjectFormSchema;
pub use update_project::update_project_handler;

/// Multipart part that carries the project image.
pub const PROJECT_IMAGE_FIELD: &str = "projectImage";
