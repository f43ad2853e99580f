pub mod new_palette;
pub mod new_project;
pub mod palette;
pub mod project;
