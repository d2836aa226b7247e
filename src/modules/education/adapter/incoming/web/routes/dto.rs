use serde::Deserialize;
use utoipa::ToSchema;

use crate::modules::education::application::domain::entities::{EducationDraft, EducationPatch};
use crate::shared::api::PatchField;

/// Dates accept `YYYY-MM-DD` or RFC 3339.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateEducationRequest {
    pub school: Option<String>,
    pub degree: Option<String>,
    pub field_of_study: Option<String>,
    #[schema(example = "2018-09-01")]
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub location: Option<String>,
}

impl From<CreateEducationRequest> for EducationDraft {
    fn from(req: CreateEducationRequest) -> Self {
        EducationDraft {
            school: req.school,
            degree: req.degree,
            field_of_study: req.field_of_study,
            start_date: req.start_date,
            end_date: req.end_date,
            location: req.location,
        }
    }
}

/// Omitted fields keep their value; `null` clears `endDate` or `location`.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEducationRequest {
    pub school: Option<String>,
    pub degree: Option<String>,
    pub field_of_study: Option<String>,
    pub start_date: Option<String>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub end_date: PatchField<String>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub location: PatchField<String>,
}

impl From<UpdateEducationRequest> for EducationPatch {
    fn from(req: UpdateEducationRequest) -> Self {
        EducationPatch {
            school: req.school,
            degree: req.degree,
            field_of_study: req.field_of_study,
            start_date: req.start_date,
            end_date: req.end_date,
            location: req.location,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_update_request_distinguishes_null_end_date() {
        let req: UpdateEducationRequest =
            serde_json::from_value(json!({"endDate": null, "degree": "MSc"})).unwrap();
        let patch = EducationPatch::from(req);

        assert_eq!(patch.end_date, PatchField::Null);
        assert!(patch.location.is_unset());
        assert_eq!(patch.degree.as_deref(), Some("MSc"));
    }

    #[test]
    fn test_create_request_reads_camel_case() {
        let req: CreateEducationRequest =
            serde_json::from_value(json!({"fieldOfStudy": "Physics"})).unwrap();
        assert_eq!(req.field_of_study.as_deref(), Some("Physics"));
        assert_eq!(req.school, None);
    }
}
