mod admin;
mod public;
mod skill_form;

pub use admin::{
    __path_create_skill_handler, __path_delete_skill_handler, __path_update_skill_handler,
    create_skill_handler, delete_skill_handler, update_skill_handler,
};
pub use public::{__path_get_skill_handler, __path_get_skills_handler, get_skill_handler, get_skills_handler};
pub use skill_form::SkillFormSchema;

pub const SKILL_ICON_FIELD: &str = "skillIcon";
const NOT_FOUND_MESSAGE: &str = "Skill not found";
