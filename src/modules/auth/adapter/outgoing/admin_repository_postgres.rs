use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, Set};
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use super::sea_orm_entity::admins::ActiveModel;
use crate::auth::application::domain::entities::{AdminProfile, NewAdmin};
use crate::auth::application::ports::outgoing::{AdminRepository, AdminRepositoryError};
use crate::shared::persistence::is_unique_violation;

pub const ADMINS_USERNAME_INDEX: &str = "idx_admins_username";
pub const ADMINS_EMAIL_INDEX: &str = "idx_admins_email";

#[derive(Clone, Debug)]
pub struct AdminRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl AdminRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AdminRepository for AdminRepositoryPostgres {
    async fn create_admin(&self, data: NewAdmin) -> Result<AdminProfile, AdminRepositoryError> {
        let now = Utc::now().fixed_offset();

        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            username: Set(data.username),
            email: Set(data.email),
            password_hash: Set(data.password_hash),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let saved = model.insert(&*self.db).await.map_err(map_admin_error)?;
        info!(admin_id = %saved.id, "Administrator created");

        Ok(AdminProfile {
            id: saved.id,
            username: saved.username,
            email: saved.email,
        })
    }
}

fn map_admin_error(e: DbErr) -> AdminRepositoryError {
    if is_unique_violation(&e, ADMINS_USERNAME_INDEX) {
        AdminRepositoryError::UsernameAlreadyExists
    } else if is_unique_violation(&e, ADMINS_EMAIL_INDEX) {
        AdminRepositoryError::EmailAlreadyExists
    } else {
        AdminRepositoryError::DatabaseError(e.to_string())
    }
}
