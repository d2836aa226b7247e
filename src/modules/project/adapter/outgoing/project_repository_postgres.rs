use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::project::adapter::outgoing::sea_orm_entity::projects::{
    self, ActiveModel, Column, Entity,
};
use crate::modules::project::application::domain::entities::{Project, ProjectData};
use crate::modules::project::application::ports::outgoing::project_repository::{
    ProjectRepository, ProjectRepositoryError,
};
use crate::shared::persistence::is_unique_violation;

pub const PROJECTS_GITHUB_LINK_INDEX: &str = "idx_projects_github_link";
pub const PROJECTS_DEMO_LIVE_INDEX: &str = "idx_projects_demo_live";

// ============================================================================
// Repository Implementation
// ============================================================================

#[derive(Clone)]
pub struct ProjectRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProjectRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProjectRepository for ProjectRepositoryPostgres {
    async fn create_project(&self, data: ProjectData) -> Result<Project, ProjectRepositoryError> {
        let now = Utc::now().fixed_offset();

        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(data.name),
            description: Set(data.description),
            project_image: Set(data.project_image),
            technologies: Set(to_json(&data.technologies)?),
            github_link: Set(data.github_link),
            demo_live: Set(data.demo_live),
            key_features: Set(to_json(&data.key_features)?),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let result = model.insert(&*self.db).await.map_err(map_write_error)?;

        model_to_project(result)
    }

    async fn find_all(&self) -> Result<Vec<Project>, ProjectRepositoryError> {
        Entity::find()
            .order_by_asc(Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?
            .into_iter()
            .map(model_to_project)
            .collect()
    }

    async fn find_by_id(&self, project_id: Uuid) -> Result<Option<Project>, ProjectRepositoryError> {
        Entity::find_by_id(project_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .map(model_to_project)
            .transpose()
    }

    async fn replace_project(
        &self,
        project_id: Uuid,
        data: ProjectData,
    ) -> Result<Project, ProjectRepositoryError> {
        let model = ActiveModel {
            name: Set(data.name),
            description: Set(data.description),
            project_image: Set(data.project_image),
            technologies: Set(to_json(&data.technologies)?),
            github_link: Set(data.github_link),
            demo_live: Set(data.demo_live),
            key_features: Set(to_json(&data.key_features)?),
            updated_at: Set(Utc::now().fixed_offset()),
            ..Default::default()
        };

        let results = Entity::update_many()
            .set(model)
            .filter(Column::Id.eq(project_id))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_write_error)?;

        let result = results
            .into_iter()
            .next()
            .ok_or(ProjectRepositoryError::NotFound)?;

        model_to_project(result)
    }

    async fn delete_project(&self, project_id: Uuid) -> Result<(), ProjectRepositoryError> {
        let result = Entity::delete_by_id(project_id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(ProjectRepositoryError::NotFound);
        }

        Ok(())
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn model_to_project(model: projects::Model) -> Result<Project, ProjectRepositoryError> {
    Ok(Project {
        id: model.id,
        name: model.name,
        description: model.description,
        project_image: model.project_image,
        technologies: from_json(&model.technologies)?,
        github_link: model.github_link,
        demo_live: model.demo_live,
        key_features: from_json(&model.key_features)?,
        created_at: model.created_at.into(),
        updated_at: model.updated_at.into(),
    })
}

fn to_json<T: serde::Serialize>(data: &T) -> Result<serde_json::Value, ProjectRepositoryError> {
    serde_json::to_value(data)
        .map_err(|e| ProjectRepositoryError::SerializationError(e.to_string()))
}

fn from_json<T: serde::de::DeserializeOwned>(
    json: &serde_json::Value,
) -> Result<T, ProjectRepositoryError> {
    serde_json::from_value(json.clone())
        .map_err(|e| ProjectRepositoryError::SerializationError(e.to_string()))
}

fn map_write_error(e: DbErr) -> ProjectRepositoryError {
    if is_unique_violation(&e, PROJECTS_GITHUB_LINK_INDEX) {
        ProjectRepositoryError::GithubLinkAlreadyExists
    } else if is_unique_violation(&e, PROJECTS_DEMO_LIVE_INDEX) {
        ProjectRepositoryError::DemoLiveAlreadyExists
    } else {
        map_db_err(e)
    }
}

fn map_db_err(e: DbErr) -> ProjectRepositoryError {
    ProjectRepositoryError::DatabaseError(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================
