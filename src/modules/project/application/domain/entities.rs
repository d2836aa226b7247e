use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::shared::api::PatchField;
use crate::shared::validation::{non_blank, MissingFields, RequiredFields};

pub const MIN_NAME_LEN: usize = 10;
pub const MIN_DESCRIPTION_LEN: usize = 10;

//
// ──────────────────────────────────────────────────────────
// Stored project
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub project_image: String,
    pub technologies: Vec<String>,
    pub github_link: Option<String>,
    pub demo_live: Option<String>,
    pub key_features: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

//
// ──────────────────────────────────────────────────────────
// Validation
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProjectValidationError {
    #[error("Project validation failed: {0}")]
    Missing(MissingFields),

    #[error("Project name must be at least 10 characters")]
    NameTooShort,

    #[error("Project description must be at least 10 characters")]
    DescriptionTooShort,

    #[error("At least one technology is required")]
    NoTechnologies,

    #[error("Project image is required.")]
    MissingImage,
}

/// Project fields as submitted, before any rule has been checked.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectDraft {
    pub name: Option<String>,
    pub description: Option<String>,
    pub technologies: Option<Vec<String>>,
    pub github_link: Option<String>,
    pub demo_live: Option<String>,
    pub key_features: Option<Vec<String>>,
}

/// A draft that passed every rule except the image requirement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectFields {
    pub name: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub github_link: Option<String>,
    pub demo_live: Option<String>,
    pub key_features: Vec<String>,
}

/// Everything the repository needs to write a project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectData {
    pub name: String,
    pub description: String,
    pub project_image: String,
    pub technologies: Vec<String>,
    pub github_link: Option<String>,
    pub demo_live: Option<String>,
    pub key_features: Vec<String>,
}

impl ProjectDraft {
    pub fn validate(self) -> Result<ProjectFields, ProjectValidationError> {
        let mut required = RequiredFields::new();
        let name = required.take("name", self.name);
        let description = required.take("description", self.description);
        let technologies = required.take_with("technologies", self.technologies);
        required.finish().map_err(ProjectValidationError::Missing)?;

        if name.chars().count() < MIN_NAME_LEN {
            return Err(ProjectValidationError::NameTooShort);
        }
        if description.chars().count() < MIN_DESCRIPTION_LEN {
            return Err(ProjectValidationError::DescriptionTooShort);
        }

        let technologies = technologies.unwrap_or_default();
        if technologies.is_empty() {
            return Err(ProjectValidationError::NoTechnologies);
        }

        Ok(ProjectFields {
            name,
            description,
            technologies,
            github_link: non_blank(self.github_link),
            demo_live: non_blank(self.demo_live),
            key_features: self.key_features.unwrap_or_default(),
        })
    }
}

impl ProjectFields {
    pub fn with_image(self, project_image: Option<String>) -> Result<ProjectData, ProjectValidationError> {
        let project_image = non_blank(project_image).ok_or(ProjectValidationError::MissingImage)?;

        Ok(ProjectData {
            name: self.name,
            description: self.description,
            project_image,
            technologies: self.technologies,
            github_link: self.github_link,
            demo_live: self.demo_live,
            key_features: self.key_features,
        })
    }
}

//
// ──────────────────────────────────────────────────────────
// Update
// ──────────────────────────────────────────────────────────
//

/// Fields submitted on update. Absent fields keep their stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub technologies: Option<Vec<String>>,
    pub github_link: PatchField<String>,
    pub demo_live: PatchField<String>,
    pub key_features: Option<Vec<String>>,
}

impl ProjectPatch {
    /// Overlays the patch on the stored project so the result can be validated
    /// exactly like a new submission.
    pub fn merge_into(self, current: &Project) -> ProjectDraft {
        ProjectDraft {
            name: Some(self.name.unwrap_or_else(|| current.name.clone())),
            description: Some(self.description.unwrap_or_else(|| current.description.clone())),
            technologies: Some(
                self.technologies
                    .unwrap_or_else(|| current.technologies.clone()),
            ),
            github_link: self.github_link.apply(current.github_link.clone()),
            demo_live: self.demo_live.apply(current.demo_live.clone()),
            key_features: Some(
                self.key_features
                    .unwrap_or_else(|| current.key_features.clone()),
            ),
        }
    }
}
