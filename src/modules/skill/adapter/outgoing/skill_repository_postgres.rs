use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::skills::{self, ActiveModel, Column, Entity};
use crate::modules::skill::application::domain::entities::{Skill, SkillData};
use crate::modules::skill::application::ports::outgoing::skill_repository::{
    SkillRepository, SkillRepositoryError,
};
use crate::shared::persistence::is_unique_violation;

pub const SKILLS_NAME_INDEX: &str = "idx_skills_name";

#[derive(Clone)]
pub struct SkillRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl SkillRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SkillRepository for SkillRepositoryPostgres {
    async fn create_skill(&self, data: SkillData) -> Result<Skill, SkillRepositoryError> {
        let now = Utc::now().fixed_offset();

        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(data.name),
            category: Set(data.category.into()),
            skill_icon: Set(data.skill_icon),
            level: Set(data.level.map(Into::into)),
            description: Set(data.description),
            official_website: Set(data.official_website),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let saved = model.insert(&*self.db).await.map_err(map_write_error)?;
        Ok(model_to_skill(saved))
    }

    async fn find_all(&self) -> Result<Vec<Skill>, SkillRepositoryError> {
        let rows = Entity::find()
            .order_by_asc(Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(rows.into_iter().map(model_to_skill).collect())
    }

    async fn find_by_id(&self, skill_id: Uuid) -> Result<Option<Skill>, SkillRepositoryError> {
        let row = Entity::find_by_id(skill_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(row.map(model_to_skill))
    }

    async fn replace_skill(
        &self,
        skill_id: Uuid,
        data: SkillData,
    ) -> Result<Skill, SkillRepositoryError> {
        let model = ActiveModel {
            name: Set(data.name),
            category: Set(data.category.into()),
            skill_icon: Set(data.skill_icon),
            level: Set(data.level.map(Into::into)),
            description: Set(data.description),
            official_website: Set(data.official_website),
            updated_at: Set(Utc::now().fixed_offset()),
            ..Default::default()
        };

        Entity::update_many()
            .set(model)
            .filter(Column::Id.eq(skill_id))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_write_error)?
            .into_iter()
            .next()
            .map(model_to_skill)
            .ok_or(SkillRepositoryError::NotFound)
    }

    async fn delete_skill(&self, skill_id: Uuid) -> Result<(), SkillRepositoryError> {
        let result = Entity::delete_by_id(skill_id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(SkillRepositoryError::NotFound);
        }
        Ok(())
    }
}

fn model_to_skill(model: skills::Model) -> Skill {
    Skill {
        id: model.id,
        name: model.name,
        category: model.category.into(),
        skill_icon: model.skill_icon,
        level: model.level.map(Into::into),
        description: model.description,
        official_website: model.official_website,
        created_at: model.created_at.into(),
        updated_at: model.updated_at.into(),
    }
}

fn map_write_error(e: DbErr) -> SkillRepositoryError {
    if is_unique_violation(&e, SKILLS_NAME_INDEX) {
        SkillRepositoryError::NameAlreadyExists
    } else {
        map_db_err(e)
    }
}

fn map_db_err(e: DbErr) -> SkillRepositoryError {
    SkillRepositoryError::DatabaseError(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::skill::adapter::outgoing::sea_orm_entity::skills::{Category, Level};
    use crate::modules::skill::application::domain::entities::{SkillCategory, SkillLevel};
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    fn row(name: &str) -> skills::Model {
        let now = Utc::now().fixed_offset();
        skills::Model {
            id: Uuid::new_v4(),
            name: name.to_string(),
            category: Category::Backend,
            skill_icon: "/uploads/rust.svg".to_string(),
            level: Some(Level::Advanced),
            description: String::new(),
            official_website: String::new(),
            created_at: now,
            updated_at: now,
        }
    }

    fn data() -> SkillData {
        SkillData {
            name: "Rust".to_string(),
            category: SkillCategory::Backend,
            skill_icon: "/uploads/rust.svg".to_string(),
            level: Some(SkillLevel::Advanced),
            description: String::new(),
            official_website: String::new(),
        }
    }

    #[tokio::test]
    async fn test_create_skill_maps_enums() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![row("Rust")]])
            .into_connection();

        let skill = SkillRepositoryPostgres::new(Arc::new(db))
            .create_skill(data())
            .await
            .unwrap();

        assert_eq!(skill.category, SkillCategory::Backend);
        assert_eq!(skill.level, Some(SkillLevel::Advanced));
    }

    #[tokio::test]
    async fn test_second_skill_with_same_name_fails() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![row("Rust")]])
            .append_query_errors(vec![DbErr::Custom(
                "duplicate key value violates unique constraint \"idx_skills_name\"".to_string(),
            )])
            .into_connection();

        let repo = SkillRepositoryPostgres::new(Arc::new(db));
        assert!(repo.create_skill(data()).await.is_ok());

        let err = repo.create_skill(data()).await.unwrap_err();
        assert!(matches!(err, SkillRepositoryError::NameAlreadyExists));
    }

    #[tokio::test]
    async fn test_find_all() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![row("Rust"), row("Go")]])
            .into_connection();

        let skills = SkillRepositoryPostgres::new(Arc::new(db))
            .find_all()
            .await
            .unwrap();

        assert_eq!(skills.len(), 2);
        assert_eq!(skills[1].name, "Go");
    }

    #[tokio::test]
    async fn test_replace_missing_skill() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<skills::Model>::new()])
            .into_connection();

        let err = SkillRepositoryPostgres::new(Arc::new(db))
            .replace_skill(Uuid::new_v4(), data())
            .await
            .unwrap_err();

        assert!(matches!(err, SkillRepositoryError::NotFound));
    }

    #[tokio::test]
    async fn test_delete_missing_skill() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();

        let err = SkillRepositoryPostgres::new(Arc::new(db))
            .delete_skill(Uuid::new_v4())
            .await
            .unwrap_err();

        assert!(matches!(err, SkillRepositoryError::NotFound));
    }
}
