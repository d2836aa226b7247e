use sea_orm::entity::prelude::*;

use crate::modules::experience::application::domain::entities::EmploymentType;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "experiences")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub title: String,
    pub company: String,
    pub start_date: DateTimeWithTimeZone,
    pub end_date: Option<DateTimeWithTimeZone>,
    pub location: Option<String>,
    pub employment_type: Employment,
    pub is_current: bool,
    pub description: Option<String>,
    #[sea_orm(column_type = "JsonBinary")]
    pub technologies: Json,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum Employment {
    #[sea_orm(string_value = "Full-time")]
    FullTime,
    #[sea_orm(string_value = "Part-time")]
    PartTime,
    #[sea_orm(string_value = "Internship")]
    Internship,
    #[sea_orm(string_value = "Freelance")]
    Freelance,
    #[sea_orm(string_value = "Self-employed")]
    SelfEmployed,
    #[sea_orm(string_value = "Remote")]
    Remote,
}

impl From<EmploymentType> for Employment {
    fn from(t: EmploymentType) -> Self {
        match t {
            EmploymentType::FullTime => Employment::FullTime,
            EmploymentType::PartTime => Employment::PartTime,
            EmploymentType::Internship => Employment::Internship,
            EmploymentType::Freelance => Employment::Freelance,
            EmploymentType::SelfEmployed => Employment::SelfEmployed,
            EmploymentType::Remote => Employment::Remote,
        }
    }
}

impl From<Employment> for EmploymentType {
    fn from(e: Employment) -> Self {
        match e {
            Employment::FullTime => EmploymentType::FullTime,
            Employment::PartTime => EmploymentType::PartTime,
            Employment::Internship => EmploymentType::Internship,
            Employment::Freelance => EmploymentType::Freelance,
            Employment::SelfEmployed => EmploymentType::SelfEmployed,
            Employment::Remote => EmploymentType::Remote,
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
