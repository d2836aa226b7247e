mod json_config;
mod list_field;
mod multipart_form;
mod patch_field;
mod response;

pub use json_config::{custom_json_config, INVALID_BODY_MESSAGE};
pub use list_field::{decode_optional_list, ListField, ListFieldError};
pub use multipart_form::{FormError, MultipartForm};
pub use patch_field::PatchField;
pub use response::{ApiResponse, ErrorClass};

use uuid::Uuid;

/// Path ids that are not UUIDs cannot match any stored document.
pub fn parse_id(raw: &str) -> Option<Uuid> {
    Uuid::parse_str(raw.trim()).ok()
}
