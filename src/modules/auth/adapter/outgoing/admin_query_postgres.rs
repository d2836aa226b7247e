use super::sea_orm_entity::admins::{
    Column as AdminColumn, Entity as AdminEntity, Model as AdminModel,
};
use crate::auth::application::domain::entities::{AdminProfile, AdminRecord};
use crate::auth::application::ports::outgoing::{AdminQuery, AdminQueryError};
use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use std::sync::Arc;
use uuid::Uuid;

#[derive(Clone, Debug)]
pub struct AdminQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl AdminQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn to_record(model: AdminModel) -> AdminRecord {
        AdminRecord {
            id: model.id,
            username: model.username,
            email: model.email,
            password_hash: model.password_hash,
        }
    }
}

#[async_trait]
impl AdminQuery for AdminQueryPostgres {
    async fn find_by_email(&self, email: &str) -> Result<Option<AdminRecord>, AdminQueryError> {
        let admin = AdminEntity::find()
            .filter(AdminColumn::Email.eq(email))
            .one(&*self.db)
            .await
            .map_err(|e| AdminQueryError::DatabaseError(e.to_string()))?;

        Ok(admin.map(Self::to_record))
    }

    async fn find_by_id(&self, admin_id: Uuid) -> Result<Option<AdminProfile>, AdminQueryError> {
        let admin = AdminEntity::find_by_id(admin_id)
            .one(&*self.db)
            .await
            .map_err(|e| AdminQueryError::DatabaseError(e.to_string()))?;

        Ok(admin.map(|m| Self::to_record(m).into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase};

    fn admin_model(id: Uuid) -> AdminModel {
        let now = Utc::now().fixed_offset();
        AdminModel {
            id,
            username: "admin".to_string(),
            email: "admin@example.com".to_string(),
            password_hash: "$argon2id$v=19$hash".to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn test_find_by_email_returns_record_with_hash() {
        let id = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![admin_model(id)]])
            .into_connection();

        let query = AdminQueryPostgres::new(Arc::new(db));
        let record = query.find_by_email("admin@example.com").await.unwrap().unwrap();

        assert_eq!(record.id, id);
        assert_eq!(record.password_hash, "$argon2id$v=19$hash");
    }

    #[tokio::test]
    async fn test_find_by_id_returns_profile() {
        let id = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![admin_model(id)]])
            .into_connection();

        let query = AdminQueryPostgres::new(Arc::new(db));
        let profile = query.find_by_id(id).await.unwrap().unwrap();

        assert_eq!(profile.username, "admin");
        assert_eq!(profile.email, "admin@example.com");
    }

    #[tokio::test]
    async fn test_find_by_id_missing() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<AdminModel>::new()])
            .into_connection();

        let query = AdminQueryPostgres::new(Arc::new(db));
        assert!(query.find_by_id(Uuid::new_v4()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_database_error_is_mapped() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors(vec![DbErr::Custom("connection refused".to_string())])
            .into_connection();

        let query = AdminQueryPostgres::new(Arc::new(db));
        let err = query.find_by_email("admin@example.com").await.unwrap_err();

        assert!(matches!(err, AdminQueryError::DatabaseError(msg) if msg.contains("connection refused")));
    }
}
