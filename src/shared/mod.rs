pub mod api;
pub mod persistence;
pub mod storage;
pub mod validation;
