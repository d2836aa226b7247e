use serde::Deserialize;
use utoipa::ToSchema;

use crate::modules::project::application::domain::entities::{ProjectDraft, ProjectPatch};
use crate::shared::api::{decode_optional_list, ListField, ListFieldError, MultipartForm, PatchField};

/// Text parts of a project form. Lists arrive JSON-encoded.
#[derive(Debug, Default)]
pub(super) struct ProjectForm {
    name: Option<String>,
    description: Option<String>,
    technologies: Option<String>,
    github_link: Option<String>,
    demo_live: Option<String>,
    key_features: Option<String>,
}

impl ProjectForm {
    pub(super) fn take_from(form: &mut MultipartForm) -> Self {
        Self {
            name: form.take("name"),
            description: form.take("description"),
            technologies: form.take("technologies"),
            github_link: form.take("githubLink"),
            demo_live: form.take("demoLive"),
            key_features: form.take("keyFeatures"),
        }
    }

    pub(super) fn into_draft(self) -> Result<ProjectDraft, ListFieldError> {
        Ok(ProjectDraft {
            name: self.name,
            description: self.description,
            technologies: decode_optional_list(
                self.technologies.map(ListField::Encoded),
                "technologies",
            )?,
            github_link: self.github_link,
            demo_live: self.demo_live,
            key_features: decode_optional_list(
                self.key_features.map(ListField::Encoded),
                "keyFeatures",
            )?,
        })
    }

    pub(super) fn into_patch(self) -> Result<ProjectPatch, ListFieldError> {
        Ok(ProjectPatch {
            name: self.name,
            description: self.description,
            technologies: decode_optional_list(
                self.technologies.map(ListField::Encoded),
                "technologies",
            )?,
            github_link: PatchField::from_form_text(self.github_link),
            demo_live: PatchField::from_form_text(self.demo_live),
            key_features: decode_optional_list(
                self.key_features.map(ListField::Encoded),
                "keyFeatures",
            )?,
        })
    }
}

/// Multipart body accepted by project create and update.
#[derive(Deserialize, ToSchema)]
#[schema(as = ProjectForm)]
#[allow(dead_code)]
#[serde(rename_all = "camelCase")]
pub struct ProjectFormSchema {
    name: String,
    description: String,
    /// JSON-encoded list, e.g. `["Rust","Actix"]`.
    technologies: String,
    github_link: Option<String>,
    demo_live: Option<String>,
    /// JSON-encoded list.
    key_features: Option<String>,
    #[schema(value_type = String, format = Binary)]
    project_image: Vec<u8>,
}
