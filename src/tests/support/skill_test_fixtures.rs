use chrono::{TimeZone, Utc};
use uuid::Uuid;

use crate::modules::skill::application::domain::entities::{Skill, SkillCategory, SkillLevel};

pub fn sample_skill() -> Skill {
    let created = Utc.with_ymd_and_hms(2024, 5, 2, 10, 0, 0).unwrap();
    Skill {
        id: Uuid::new_v4(),
        name: "Rust".to_string(),
        category: SkillCategory::Backend,
        skill_icon: "/uploads/rust.svg".to_string(),
        level: Some(SkillLevel::Advanced),
        description: "Systems programming language".to_string(),
        official_website: "https://www.rust-lang.org".to_string(),
        created_at: created,
        updated_at: created,
    }
}
