use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::education::{self, ActiveModel, Column, Entity};
use crate::modules::education::application::domain::entities::{EducationData, EducationRecord};
use crate::modules::education::application::ports::outgoing::education_repository::{
    EducationRepository, EducationRepositoryError,
};

#[derive(Clone)]
pub struct EducationRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl EducationRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn active_model(data: EducationData) -> ActiveModel {
    ActiveModel {
        school: Set(data.school),
        degree: Set(data.degree),
        field_of_study: Set(data.field_of_study),
        start_date: Set(data.start_date.fixed_offset()),
        end_date: Set(data.end_date.map(|d| d.fixed_offset())),
        location: Set(data.location),
        updated_at: Set(Utc::now().fixed_offset()),
        ..Default::default()
    }
}

#[async_trait]
impl EducationRepository for EducationRepositoryPostgres {
    async fn create(&self, data: EducationData) -> Result<EducationRecord, EducationRepositoryError> {
        let mut model = active_model(data);
        model.id = Set(Uuid::new_v4());
        model.created_at = model.updated_at.clone();

        let saved = model.insert(&*self.db).await.map_err(map_db_err)?;
        Ok(to_record(saved))
    }

    async fn find_all(&self) -> Result<Vec<EducationRecord>, EducationRepositoryError> {
        let rows = Entity::find()
            .order_by_desc(Column::StartDate)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(rows.into_iter().map(to_record).collect())
    }

    async fn find_by_id(
        &self,
        id: Uuid,
    ) -> Result<Option<EducationRecord>, EducationRepositoryError> {
        Ok(Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .map(to_record))
    }

    async fn replace(
        &self,
        id: Uuid,
        data: EducationData,
    ) -> Result<EducationRecord, EducationRepositoryError> {
        Entity::update_many()
            .set(active_model(data))
            .filter(Column::Id.eq(id))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?
            .into_iter()
            .next()
            .map(to_record)
            .ok_or(EducationRepositoryError::NotFound)
    }

    async fn delete(&self, id: Uuid) -> Result<(), EducationRepositoryError> {
        let result = Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        match result.rows_affected {
            0 => Err(EducationRepositoryError::NotFound),
            _ => Ok(()),
        }
    }
}

fn to_record(model: education::Model) -> EducationRecord {
    EducationRecord {
        id: model.id,
        school: model.school,
        degree: model.degree,
        field_of_study: model.field_of_study,
        start_date: model.start_date.into(),
        end_date: model.end_date.map(Into::into),
        location: model.location,
        created_at: model.created_at.into(),
        updated_at: model.updated_at.into(),
    }
}

fn map_db_err(e: DbErr) -> EducationRepositoryError {
    EducationRepositoryError::DatabaseError(e.to_string())
}
