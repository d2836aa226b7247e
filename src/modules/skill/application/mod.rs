pub mod domain;
pub mod ports;
pub mod service;
pub mod skill_use_cases;
