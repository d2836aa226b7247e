mod admin;
pub mod dto;
mod get_experience;

pub use admin::{
    __path_create_experience_handler, __path_delete_experience_handler,
    __path_update_experience_handler, create_experience_handler, delete_experience_handler,
    update_experience_handler,
};
pub use get_experience::{__path_get_experience_handler, get_experience_handler};

const NOT_FOUND_MESSAGE: &str = "Experience not found.";
