// src/api/schemas.rs
use serde::Serialize;
use utoipa::ToSchema;

/// Body of every failed request.
#[derive(Serialize, ToSchema)]
pub struct MessageResponse {
    #[schema(example = "Project not found")]
    pub message: String,
}

/// Body of a successful delete.
#[derive(Serialize, ToSchema)]
pub struct DeletedResponse {
    #[schema(example = "Project deleted successfully.")]
    pub message: String,
    pub id: uuid::Uuid,
}
