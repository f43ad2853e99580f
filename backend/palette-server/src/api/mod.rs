pub mod created_response;
pub mod error;
pub mod extractors;
pub mod palettes;
pub mod path_id;
pub mod projects;
pub mod welcome;
