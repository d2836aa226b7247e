use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::shared::api::PatchField;
use crate::shared::validation::{
    non_blank, parse_date, parse_optional_date, InvalidDate, MissingFields, RequiredFields,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum EmploymentType {
    #[default]
    #[serde(rename = "Full-time")]
    FullTime,
    #[serde(rename = "Part-time")]
    PartTime,
    Internship,
    Freelance,
    #[serde(rename = "Self-employed")]
    SelfEmployed,
    Remote,
}

impl EmploymentType {
    pub const ALL: [EmploymentType; 6] = [
        EmploymentType::FullTime,
        EmploymentType::PartTime,
        EmploymentType::Internship,
        EmploymentType::Freelance,
        EmploymentType::SelfEmployed,
        EmploymentType::Remote,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            EmploymentType::FullTime => "Full-time",
            EmploymentType::PartTime => "Part-time",
            EmploymentType::Internship => "Internship",
            EmploymentType::Freelance => "Freelance",
            EmploymentType::SelfEmployed => "Self-employed",
            EmploymentType::Remote => "Remote",
        }
    }
}

impl FromStr for EmploymentType {
    type Err = ExperienceValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s.trim())
            .ok_or_else(|| ExperienceValidationError::InvalidEmploymentType(s.trim().to_string()))
    }
}

impl fmt::Display for EmploymentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceRecord {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub title: String,
    pub company: String,
    pub start_date: DateTime<Utc>,
    pub end_date: Option<DateTime<Utc>>,
    pub location: Option<String>,
    pub employment_type: EmploymentType,
    pub is_current: bool,
    pub description: Option<String>,
    pub technologies: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExperienceValidationError {
    #[error("Experience validation failed: {0}")]
    Missing(MissingFields),

    #[error(transparent)]
    InvalidDate(#[from] InvalidDate),

    #[error("'{0}' is not a valid employment type")]
    InvalidEmploymentType(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExperienceDraft {
    pub title: Option<String>,
    pub company: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub location: Option<String>,
    pub employment_type: Option<String>,
    pub is_current: Option<bool>,
    pub description: Option<String>,
    pub technologies: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExperienceData {
    pub title: String,
    pub company: String,
    pub start_date: DateTime<Utc>,
    pub end_date: Option<DateTime<Utc>>,
    pub location: Option<String>,
    pub employment_type: EmploymentType,
    pub is_current: bool,
    pub description: Option<String>,
    pub technologies: Vec<String>,
}

impl ExperienceDraft {
    pub fn validate(self) -> Result<ExperienceData, ExperienceValidationError> {
        let mut required = RequiredFields::new();
        let title = required.take("title", self.title);
        let company = required.take("company", self.company);
        let start_date = required.take("startDate", self.start_date);
        required.finish().map_err(ExperienceValidationError::Missing)?;

        // A blank type falls back to the default like an omitted one.
        let employment_type = match non_blank(self.employment_type) {
            Some(raw) => raw.parse()?,
            None => EmploymentType::default(),
        };

        Ok(ExperienceData {
            title,
            company,
            start_date: parse_date("startDate", &start_date)?,
            end_date: parse_optional_date("endDate", self.end_date)?,
            location: non_blank(self.location),
            employment_type,
            is_current: self.is_current.unwrap_or(false),
            description: non_blank(self.description),
            technologies: self.technologies.unwrap_or_default(),
        })
    }
}

/// Fields submitted on update. `null` clears the optional text fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExperiencePatch {
    pub title: Option<String>,
    pub company: Option<String>,
    pub start_date: Option<String>,
    pub end_date: PatchField<String>,
    pub location: PatchField<String>,
    pub employment_type: Option<String>,
    pub is_current: Option<bool>,
    pub description: PatchField<String>,
    pub technologies: Option<Vec<String>>,
}

fn format_date(date: DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

impl ExperiencePatch {
    pub fn merge_into(self, current: &ExperienceRecord) -> ExperienceDraft {
        ExperienceDraft {
            title: Some(self.title.unwrap_or_else(|| current.title.clone())),
            company: Some(self.company.unwrap_or_else(|| current.company.clone())),
            start_date: Some(
                self.start_date
                    .unwrap_or_else(|| format_date(current.start_date)),
            ),
            end_date: self.end_date.apply(current.end_date.map(format_date)),
            location: self.location.apply(current.location.clone()),
            employment_type: Some(
                self.employment_type
                    .unwrap_or_else(|| current.employment_type.as_str().to_string()),
            ),
            is_current: Some(self.is_current.unwrap_or(current.is_current)),
            description: self.description.apply(current.description.clone()),
            technologies: Some(
                self.technologies
                    .unwrap_or_else(|| current.technologies.clone()),
            ),
        }
    }
}
