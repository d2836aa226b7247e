use chrono::{TimeZone, Utc};
use uuid::Uuid;

use crate::modules::project::application::domain::entities::{Project, ProjectDraft};
use crate::shared::storage::UploadedFile;

pub fn sample_project() -> Project {
    let created = Utc.with_ymd_and_hms(2024, 5, 1, 9, 30, 0).unwrap();
    Project {
        id: Uuid::new_v4(),
        name: "Portfolio website".to_string(),
        description: "A personal portfolio backend".to_string(),
        project_image: "/uploads/cover.png".to_string(),
        technologies: vec!["Rust".to_string(), "Actix".to_string()],
        github_link: Some("https://github.com/me/portfolio".to_string()),
        demo_live: None,
        key_features: vec!["Admin area".to_string()],
        created_at: created,
        updated_at: created,
    }
}

pub fn valid_draft() -> ProjectDraft {
    ProjectDraft {
        name: Some("Portfolio website".to_string()),
        description: Some("A personal portfolio backend".to_string()),
        technologies: Some(vec!["Rust".to_string(), "Actix".to_string()]),
        github_link: Some("https://github.com/me/portfolio".to_string()),
        demo_live: None,
        key_features: Some(vec!["Admin area".to_string()]),
    }
}

pub fn png_upload() -> UploadedFile {
    UploadedFile {
        file_name: Some("cover.png".to_string()),
        content_type: "image/png".to_string(),
        bytes: b"\x89PNG\r\n\x1a\n".to_vec(),
    }
}
