use serde::Deserialize;
use utoipa::ToSchema;

use crate::modules::experience::application::domain::entities::{
    ExperienceDraft, ExperiencePatch,
};
use crate::shared::api::{decode_optional_list, ListField, ListFieldError, PatchField};

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateExperienceRequest {
    pub title: Option<String>,
    pub company: Option<String>,
    #[schema(example = "2021-03-01")]
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub location: Option<String>,
    #[schema(example = "Full-time")]
    pub employment_type: Option<String>,
    pub is_current: Option<bool>,
    pub description: Option<String>,
    /// A JSON array, or the same array encoded as a string.
    #[schema(value_type = Option<Vec<String>>)]
    pub technologies: Option<ListField>,
}

impl CreateExperienceRequest {
    pub fn into_draft(self) -> Result<ExperienceDraft, ListFieldError> {
        Ok(ExperienceDraft {
            title: self.title,
            company: self.company,
            start_date: self.start_date,
            end_date: self.end_date,
            location: self.location,
            employment_type: self.employment_type,
            is_current: self.is_current,
            description: self.description,
            technologies: decode_optional_list(self.technologies, "technologies")?,
        })
    }
}

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateExperienceRequest {
    pub title: Option<String>,
    pub company: Option<String>,
    pub start_date: Option<String>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub end_date: PatchField<String>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub location: PatchField<String>,
    pub employment_type: Option<String>,
    pub is_current: Option<bool>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub description: PatchField<String>,
    #[schema(value_type = Option<Vec<String>>)]
    pub technologies: Option<ListField>,
}

impl UpdateExperienceRequest {
    pub fn into_patch(self) -> Result<ExperiencePatch, ListFieldError> {
        Ok(ExperiencePatch {
            title: self.title,
            company: self.company,
            start_date: self.start_date,
            end_date: self.end_date,
            location: self.location,
            employment_type: self.employment_type,
            is_current: self.is_current,
            description: self.description,
            technologies: decode_optional_list(self.technologies, "technologies")?,
        })
    }
}
