use sea_orm::entity::prelude::*;

use crate::modules::skill::application::domain::entities::{SkillCategory, SkillLevel};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "skills")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    #[sea_orm(unique)]
    pub name: String,

    pub category: Category,
    pub skill_icon: String,
    pub level: Option<Level>,
    pub description: String,
    pub official_website: String,

    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum Category {
    #[sea_orm(string_value = "Frontend")]
    Frontend,
    #[sea_orm(string_value = "Backend")]
    Backend,
    #[sea_orm(string_value = "DevOps")]
    DevOps,
    #[sea_orm(string_value = "Database")]
    Database,
    #[sea_orm(string_value = "Mobile")]
    Mobile,
    #[sea_orm(string_value = "Other")]
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum Level {
    #[sea_orm(string_value = "Beginner")]
    Beginner,
    #[sea_orm(string_value = "Intermediate")]
    Intermediate,
    #[sea_orm(string_value = "Advanced")]
    Advanced,
}

impl From<SkillCategory> for Category {
    fn from(c: SkillCategory) -> Self {
        match c {
            SkillCategory::Frontend => Category::Frontend,
            SkillCategory::Backend => Category::Backend,
            SkillCategory::DevOps => Category::DevOps,
            SkillCategory::Database => Category::Database,
            SkillCategory::Mobile => Category::Mobile,
            SkillCategory::Other => Category::Other,
        }
    }
}

impl From<Category> for SkillCategory {
    fn from(c: Category) -> Self {
        match c {
            Category::Frontend => SkillCategory::Frontend,
            Category::Backend => SkillCategory::Backend,
            Category::DevOps => SkillCategory::DevOps,
            Category::Database => SkillCategory::Database,
            Category::Mobile => SkillCategory::Mobile,
            Category::Other => SkillCategory::Other,
        }
    }
}

impl From<SkillLevel> for Level {
    fn from(l: SkillLevel) -> Self {
        match l {
            SkillLevel::Beginner => Level::Beginner,
            SkillLevel::Intermediate => Level::Intermediate,
            SkillLevel::Advanced => Level::Advanced,
        }
    }
}

impl From<Level> for SkillLevel {
    fn from(l: Level) -> Self {
        match l {
            Level::Beginner => SkillLevel::Beginner,
            Level::Intermediate => SkillLevel::Intermediate,
            Level::Advanced => SkillLevel::Advanced,
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        use sea_orm::ActiveValue::{self, Set};

        if let ActiveValue::Set(name) = &self.name {
            self.name = Set(name.trim().to_string());
        }

        if !insert {
            self.updated_at = Set(chrono::Utc::now().into());
        }

        Ok(self)
    }
}
