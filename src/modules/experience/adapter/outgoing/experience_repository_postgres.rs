use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::experiences::{self, ActiveModel, Column, Entity};
use crate::modules::experience::application::domain::entities::{ExperienceData, ExperienceRecord};
use crate::modules::experience::application::ports::outgoing::experience_repository::{
    ExperienceRepository, ExperienceRepositoryError,
};

#[derive(Clone)]
pub struct ExperienceRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ExperienceRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn active_model(data: ExperienceData) -> Result<ActiveModel, ExperienceRepositoryError> {
    let technologies = serde_json::to_value(&data.technologies)
        .map_err(|e| ExperienceRepositoryError::SerializationError(e.to_string()))?;

    Ok(ActiveModel {
        title: Set(data.title),
        company: Set(data.company),
        start_date: Set(data.start_date.fixed_offset()),
        end_date: Set(data.end_date.map(|d| d.fixed_offset())),
        location: Set(data.location),
        employment_type: Set(data.employment_type.into()),
        is_current: Set(data.is_current),
        description: Set(data.description),
        technologies: Set(technologies),
        updated_at: Set(Utc::now().fixed_offset()),
        ..Default::default()
    })
}

#[async_trait]
impl ExperienceRepository for ExperienceRepositoryPostgres {
    async fn create(
        &self,
        data: ExperienceData,
    ) -> Result<ExperienceRecord, ExperienceRepositoryError> {
        let mut model = active_model(data)?;
        model.id = Set(Uuid::new_v4());
        model.created_at = model.updated_at.clone();

        let saved = model.insert(&*self.db).await.map_err(map_db_err)?;
        to_record(saved)
    }

    async fn find_all(&self) -> Result<Vec<ExperienceRecord>, ExperienceRepositoryError> {
        Entity::find()
            .order_by_desc(Column::StartDate)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?
            .into_iter()
            .map(to_record)
            .collect()
    }

    async fn find_by_id(
        &self,
        id: Uuid,
    ) -> Result<Option<ExperienceRecord>, ExperienceRepositoryError> {
        Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .map(to_record)
            .transpose()
    }

    async fn replace(
        &self,
        id: Uuid,
        data: ExperienceData,
    ) -> Result<ExperienceRecord, ExperienceRepositoryError> {
        let updated = Entity::update_many()
            .set(active_model(data)?)
            .filter(Column::Id.eq(id))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?
            .into_iter()
            .next()
            .ok_or(ExperienceRepositoryError::NotFound)?;

        to_record(updated)
    }

    async fn delete(&self, id: Uuid) -> Result<(), ExperienceRepositoryError> {
        let result = Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        match result.rows_affected {
            0 => Err(ExperienceRepositoryError::NotFound),
            _ => Ok(()),
        }
    }
}

fn to_record(model: experiences::Model) -> Result<ExperienceRecord, ExperienceRepositoryError> {
    let technologies = serde_json::from_value(model.technologies)
        .map_err(|e| ExperienceRepositoryError::SerializationError(e.to_string()))?;

    Ok(ExperienceRecord {
        id: model.id,
        title: model.title,
        company: model.company,
        start_date: model.start_date.into(),
        end_date: model.end_date.map(Into::into),
        location: model.location,
        employment_type: model.employment_type.into(),
        is_current: model.is_current,
        description: model.description,
        technologies,
        created_at: model.created_at.into(),
        updated_at: model.updated_at.into(),
    })
}

fn map_db_err(e: DbErr) -> ExperienceRepositoryError {
    ExperienceRepositoryError::DatabaseError(e.to_string())
}
