pub mod create_palette_request;
#[allow(clippy::module_inception)]
pub mod palettes;
