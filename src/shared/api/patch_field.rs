use serde::{Deserialize, Serialize};

//
// ──────────────────────────────────────────────────────────
// PatchField (explicit update semantics for nullable fields)
// ──────────────────────────────────────────────────────────
// Meaning:
// - Unset: field not provided => keep stored value
// - Null: explicitly null => clear the stored value
// - Value(v): replace with v
//
// Serde behavior:
// - omitted field => Unset (because of #[serde(default)] on the field)
// - null => Null
// - value => Value(value)
//

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PatchField<T> {
    #[serde(skip)]
    Unset,
    Null,
    Value(T),
}

impl<T> Default for PatchField<T> {
    fn default() -> Self {
        PatchField::Unset
    }
}

impl<T> PatchField<T> {
    pub fn is_unset(&self) -> bool {
        matches!(self, PatchField::Unset)
    }

    /// Resolves the patch against the currently stored value.
    pub fn apply(self, current: Option<T>) -> Option<T> {
        match self {
            PatchField::Unset => current,
            PatchField::Null => None,
            PatchField::Value(v) => Some(v),
        }
    }
}

impl PatchField<String> {
    /// Multipart forms cannot send null, so an empty text field clears the value.
    pub fn from_form_text(value: Option<String>) -> Self {
        match value {
            None => PatchField::Unset,
            Some(v) if v.trim().is_empty() => PatchField::Null,
            Some(v) => PatchField::Value(v),
        }
    }
}
