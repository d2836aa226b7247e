use chrono::{DateTime, NaiveDate, Utc};

/// Trims a value and drops it when nothing is left.
pub fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("required fields are missing ({})", .0.join(", "))]
pub struct MissingFields(pub Vec<&'static str>);

/// Collects every missing required field before failing, so a client sees
/// the whole list at once.
#[derive(Debug, Default)]
pub struct RequiredFields {
    missing: Vec<&'static str>,
}

impl RequiredFields {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn take(&mut self, name: &'static str, value: Option<String>) -> String {
        match non_blank(value) {
            Some(v) => v,
            None => {
                self.missing.push(name);
                String::new()
            }
        }
    }

    pub fn take_with<T>(&mut self, name: &'static str, value: Option<T>) -> Option<T> {
        if value.is_none() {
            self.missing.push(name);
        }
        value
    }

    pub fn finish(self) -> Result<(), MissingFields> {
        if self.missing.is_empty() {
            Ok(())
        } else {
            Err(MissingFields(self.missing))
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{field} must be a date (YYYY-MM-DD or RFC 3339)")]
pub struct InvalidDate {
    pub field: &'static str,
}

pub fn parse_date(field: &'static str, raw: &str) -> Result<DateTime<Utc>, InvalidDate> {
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.with_timezone(&Utc));
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .ok_or(InvalidDate { field })
}

/// Parses an optional date where blank input means "no date".
pub fn parse_optional_date(
    field: &'static str,
    raw: Option<String>,
) -> Result<Option<DateTime<Utc>>, InvalidDate> {
    non_blank(raw).map(|v| parse_date(field, &v)).transpose()
}
