pub mod education_repository;
