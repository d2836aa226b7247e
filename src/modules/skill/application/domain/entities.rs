use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::shared::api::PatchField;
use crate::shared::validation::{non_blank, MissingFields, RequiredFields};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum SkillCategory {
    Frontend,
    Backend,
    DevOps,
    Database,
    Mobile,
    Other,
}

impl SkillCategory {
    pub const ALL: [SkillCategory; 6] = [
        SkillCategory::Frontend,
        SkillCategory::Backend,
        SkillCategory::DevOps,
        SkillCategory::Database,
        SkillCategory::Mobile,
        SkillCategory::Other,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SkillCategory::Frontend => "Frontend",
            SkillCategory::Backend => "Backend",
            SkillCategory::DevOps => "DevOps",
            SkillCategory::Database => "Database",
            SkillCategory::Mobile => "Mobile",
            SkillCategory::Other => "Other",
        }
    }
}

impl FromStr for SkillCategory {
    type Err = SkillValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s.trim())
            .ok_or_else(|| SkillValidationError::InvalidCategory(s.trim().to_string()))
    }
}

impl fmt::Display for SkillCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum SkillLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl SkillLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            SkillLevel::Beginner => "Beginner",
            SkillLevel::Intermediate => "Intermediate",
            SkillLevel::Advanced => "Advanced",
        }
    }
}

impl FromStr for SkillLevel {
    type Err = SkillValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Beginner" => Ok(SkillLevel::Beginner),
            "Intermediate" => Ok(SkillLevel::Intermediate),
            "Advanced" => Ok(SkillLevel::Advanced),
            other => Err(SkillValidationError::InvalidLevel(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub name: String,
    pub category: SkillCategory,
    pub skill_icon: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<SkillLevel>,
    pub description: String,
    pub official_website: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SkillValidationError {
    #[error("Skill validation failed: {0}")]
    Missing(MissingFields),

    #[error("'{0}' is not a valid skill category")]
    InvalidCategory(String),

    #[error("'{0}' is not a valid skill level")]
    InvalidLevel(String),

    #[error("Skill icon is required.")]
    MissingIcon,

    #[error("Skill name must be at most {0} characters")]
    NameTooLong(usize),
}

/// Skill fields as submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkillDraft {
    pub name: Option<String>,
    pub category: Option<String>,
    pub level: Option<String>,
    pub description: Option<String>,
    pub official_website: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillFields {
    pub name: String,
    pub category: SkillCategory,
    pub level: Option<SkillLevel>,
    pub description: String,
    pub official_website: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillData {
    pub name: String,
    pub category: SkillCategory,
    pub skill_icon: String,
    pub level: Option<SkillLevel>,
    pub description: String,
    pub official_website: String,
}

impl SkillDraft {
    /// Matches the width of `skills.name`.
    pub const NAME_MAX_LEN: usize = 100;

    pub fn validate(self) -> Result<SkillFields, SkillValidationError> {
        let mut required = RequiredFields::new();
        let name = required.take("name", self.name);
        let category = required.take("category", self.category);
        required.finish().map_err(SkillValidationError::Missing)?;

        if name.chars().count() > Self::NAME_MAX_LEN {
            return Err(SkillValidationError::NameTooLong(Self::NAME_MAX_LEN));
        }

        let level = non_blank(self.level)
            .map(|l| l.parse::<SkillLevel>())
            .transpose()?;

        Ok(SkillFields {
            name,
            category: category.parse()?,
            level,
            description: non_blank(self.description).unwrap_or_default(),
            official_website: non_blank(self.official_website).unwrap_or_default(),
        })
    }
}

impl SkillFields {
    pub fn with_icon(self, skill_icon: Option<String>) -> Result<SkillData, SkillValidationError> {
        Ok(SkillData {
            skill_icon: non_blank(skill_icon).ok_or(SkillValidationError::MissingIcon)?,
            name: self.name,
            category: self.category,
            level: self.level,
            description: self.description,
            official_website: self.official_website,
        })
    }
}

/// Fields submitted on update. `level` can be cleared; the text fields with
/// defaults fall back to "" when blank.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkillPatch {
    pub name: Option<String>,
    pub category: Option<String>,
    pub level: PatchField<String>,
    pub description: Option<String>,
    pub official_website: Option<String>,
}

impl SkillPatch {
    pub fn merge_into(self, current: &Skill) -> SkillDraft {
        SkillDraft {
            name: Some(self.name.unwrap_or_else(|| current.name.clone())),
            category: Some(
                self.category
                    .unwrap_or_else(|| current.category.as_str().to_string()),
            ),
            level: self
                .level
                .apply(current.level.map(|l| l.as_str().to_string())),
            description: Some(
                self.description
                    .unwrap_or_else(|| current.description.clone()),
            ),
            official_website: Some(
                self.official_website
                    .unwrap_or_else(|| current.official_website.clone()),
            ),
        }
    }
}
