pub mod domain;
pub mod education_use_cases;
pub mod ports;
pub mod service;
