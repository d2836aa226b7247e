use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::shared::api::PatchField;
use crate::shared::validation::{
    non_blank, parse_date, parse_optional_date, InvalidDate, MissingFields, RequiredFields,
};

/// A school entry. No `endDate` means the studies are ongoing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EducationRecord {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub school: String,
    pub degree: String,
    pub field_of_study: String,
    pub start_date: DateTime<Utc>,
    pub end_date: Option<DateTime<Utc>>,
    pub location: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EducationValidationError {
    #[error("Education validation failed: {0}")]
    Missing(MissingFields),

    #[error(transparent)]
    InvalidDate(#[from] InvalidDate),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EducationDraft {
    pub school: Option<String>,
    pub degree: Option<String>,
    pub field_of_study: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub location: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EducationData {
    pub school: String,
    pub degree: String,
    pub field_of_study: String,
    pub start_date: DateTime<Utc>,
    pub end_date: Option<DateTime<Utc>>,
    pub location: Option<String>,
}

impl EducationDraft {
    pub fn validate(self) -> Result<EducationData, EducationValidationError> {
        let mut required = RequiredFields::new();
        let school = required.take("school", self.school);
        let degree = required.take("degree", self.degree);
        let field_of_study = required.take("fieldOfStudy", self.field_of_study);
        let start_date = required.take("startDate", self.start_date);
        required.finish().map_err(EducationValidationError::Missing)?;

        Ok(EducationData {
            school,
            degree,
            field_of_study,
            start_date: parse_date("startDate", &start_date)?,
            end_date: parse_optional_date("endDate", self.end_date)?,
            location: non_blank(self.location),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EducationPatch {
    pub school: Option<String>,
    pub degree: Option<String>,
    pub field_of_study: Option<String>,
    pub start_date: Option<String>,
    pub end_date: PatchField<String>,
    pub location: PatchField<String>,
}

fn format_date(date: DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

impl EducationPatch {
    pub fn merge_into(self, current: &EducationRecord) -> EducationDraft {
        EducationDraft {
            school: Some(self.school.unwrap_or_else(|| current.school.clone())),
            degree: Some(self.degree.unwrap_or_else(|| current.degree.clone())),
            field_of_study: Some(
                self.field_of_study
                    .unwrap_or_else(|| current.field_of_study.clone()),
            ),
            start_date: Some(
                self.start_date
                    .unwrap_or_else(|| format_date(current.start_date)),
            ),
            end_date: self.end_date.apply(current.end_date.map(format_date)),
            location: self.location.apply(current.location.clone()),
        }
    }
}
