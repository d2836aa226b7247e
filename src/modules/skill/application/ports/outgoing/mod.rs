pub mod skill_repository;
