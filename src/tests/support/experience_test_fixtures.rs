use chrono::{TimeZone, Utc};
use uuid::Uuid;

use crate::modules::experience::application::domain::entities::{EmploymentType, ExperienceRecord};

pub fn sample_experience() -> ExperienceRecord {
    let created = Utc.with_ymd_and_hms(2024, 5, 4, 12, 0, 0).unwrap();
    ExperienceRecord {
        id: Uuid::new_v4(),
        title: "Backend Engineer".to_string(),
        company: "Acme".to_string(),
        start_date: Utc.with_ymd_and_hms(2021, 3, 1, 0, 0, 0).unwrap(),
        end_date: None,
        location: Some("Berlin".to_string()),
        employment_type: EmploymentType::FullTime,
        is_current: true,
        description: Some("Payments platform".to_string()),
        technologies: vec!["Go".to_string(), "Kafka".to_string()],
        created_at: created,
        updated_at: created,
    }
}
