pub mod error;
pub mod models;
pub mod validation;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result};
pub use error_location::ErrorLocation;
pub use models::new_palette::{NewPalette, PaletteDraft};
pub use models::new_project::NewProject;
pub use models::palette::Palette;
pub use models::project::Project;
pub use validation::{Presence, required};
