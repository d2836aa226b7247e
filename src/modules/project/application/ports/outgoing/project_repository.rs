use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::project::application::domain::entities::{Project, ProjectData};

#[derive(Debug, Clone, thiserror::Error)]
pub enum ProjectRepositoryError {
    #[error("GitHub link already exists")]
    GithubLinkAlreadyExists,

    #[error("Live demo link already exists")]
    DemoLiveAlreadyExists,

    #[error("Project not found")]
    NotFound,

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait ProjectRepository: Send + Sync {
    async fn create_project(&self, data: ProjectData) -> Result<Project, ProjectRepositoryError>;

    /// Oldest first.
    async fn find_all(&self) -> Result<Vec<Project>, ProjectRepositoryError>;

    async fn find_by_id(&self, project_id: Uuid) -> Result<Option<Project>, ProjectRepositoryError>;

    /// Overwrites every field of an existing project.
    async fn replace_project(
        &self,
        project_id: Uuid,
        data: ProjectData,
    ) -> Result<Project, ProjectRepositoryError>;

    async fn delete_project(&self, project_id: Uuid) -> Result<(), ProjectRepositoryError>;
}
