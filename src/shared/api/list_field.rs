use serde::Deserialize;

/// A list of strings as it arrives at the API boundary.
///
/// JSON clients send a native array. Multipart forms can only carry text, so
/// the admin dashboard sends `JSON.stringify(list)` instead. Both decode to
/// the same `Vec<String>` before any validation sees them.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ListField {
    List(Vec<String>),
    Encoded(String),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{field} must be a list of strings")]
pub struct ListFieldError {
    pub field: &'static str,
}

impl ListField {
    pub fn into_list(self, field: &'static str) -> Result<Vec<String>, ListFieldError> {
        let items = match self {
            ListField::List(items) => items,
            ListField::Encoded(raw) => {
                let raw = raw.trim();
                if raw.is_empty() {
                    Vec::new()
                } else {
                    serde_json::from_str::<Vec<String>>(raw)
                        .map_err(|_| ListFieldError { field })?
                }
            }
        };

        Ok(items
            .into_iter()
            .map(|item| item.trim().to_string())
            .filter(|item| !item.is_empty())
            .collect())
    }
}

/// Decodes an optional list field, keeping "absent" distinct from "empty".
pub fn decode_optional_list(
    value: Option<ListField>,
    field: &'static str,
) -> Result<Option<Vec<String>>, ListFieldError> {
    value.map(|v| v.into_list(field)).transpose()
}
