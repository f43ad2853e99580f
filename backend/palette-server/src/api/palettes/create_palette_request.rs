use palette_core::{NewPalette, PaletteDraft, Result as CoreResult};

use serde::Deserialize;

/// Palette fields from the request body.
///
/// A `project_id` in the body is ignored: the owning project always comes
/// from the URL path.
#[derive(Debug, Default, Deserialize)]
pub struct CreatePaletteRequest {
    #[serde(default)]
    pub palette_title: Option<String>,
    #[serde(default)]
    pub color_1: Option<String>,
    #[serde(default)]
    pub color_2: Option<String>,
    #[serde(default)]
    pub color_3: Option<String>,
    #[serde(default)]
    pub color_4: Option<String>,
    #[serde(default)]
    pub color_5: Option<String>,
}

impl CreatePaletteRequest {
    /// Attach the path's project id and validate, first missing field wins
    #[track_caller]
    pub fn into_new_palette(self, project_id: Option<i64>) -> CoreResult<NewPalette> {
        NewPalette::try_from_draft(PaletteDraft {
            palette_title: self.palette_title,
            color_1: self.color_1,
            color_2: self.color_2,
            color_3: self.color_3,
            color_4: self.color_4,
            color_5: self.color_5,
            project_id,
        })
    }
}
