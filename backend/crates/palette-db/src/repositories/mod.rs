pub mod palette_repository;
pub mod project_repository;
