use chrono::{TimeZone, Utc};
use uuid::Uuid;

use crate::modules::education::application::domain::entities::EducationRecord;

pub fn sample_education() -> EducationRecord {
    EducationRecord {
        id: Uuid::new_v4(),
        school: "MIT".to_string(),
        degree: "BSc".to_string(),
        field_of_study: "Computer Science".to_string(),
        start_date: Utc.with_ymd_and_hms(2018, 9, 1, 0, 0, 0).unwrap(),
        end_date: None,
        location: Some("Cambridge, MA".to_string()),
        created_at: Utc.with_ymd_and_hms(2024, 5, 3, 8, 0, 0).unwrap(),
        updated_at: Utc.with_ymd_and_hms(2024, 5, 3, 8, 0, 0).unwrap(),
    }
}
