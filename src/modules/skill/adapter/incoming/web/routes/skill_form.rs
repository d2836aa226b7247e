use serde::Deserialize;
use utoipa::ToSchema;

use crate::modules::skill::application::domain::entities::{
    SkillCategory, SkillDraft, SkillLevel, SkillPatch,
};
use crate::shared::api::{MultipartForm, PatchField};

pub(super) fn draft_from_form(form: &mut MultipartForm) -> SkillDraft {
    SkillDraft {
        name: form.take("name"),
        category: form.take("category"),
        level: form.take("level"),
        description: form.take("description"),
        official_website: form.take("officialWebsite"),
    }
}

pub(super) fn patch_from_form(form: &mut MultipartForm) -> SkillPatch {
    SkillPatch {
        name: form.take("name"),
        category: form.take("category"),
        level: PatchField::from_form_text(form.take("level")),
        description: form.take("description"),
        official_website: form.take("officialWebsite"),
    }
}

/// Multipart body accepted by skill create and update.
#[derive(Deserialize, ToSchema)]
#[schema(as = SkillForm)]
#[serde(rename_all = "camelCase")]
#[allow(dead_code)]
pub struct SkillFormSchema {
    name: String,
    category: SkillCategory,
    level: Option<SkillLevel>,
    description: Option<String>,
    official_website: Option<String>,
    #[schema(value_type = String, format = Binary)]
    skill_icon: Vec<u8>,
}
