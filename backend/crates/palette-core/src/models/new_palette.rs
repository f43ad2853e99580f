use crate::{Result, required};

use serde::Serialize;

/// A validated palette awaiting insertion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewPalette {
    pub palette_title: String,
    pub color_1: String,
    pub color_2: String,
    pub color_3: String,
    pub color_4: String,
    pub color_5: String,
    pub project_id: i64,
}

/// Raw palette fields as they arrive from a client. Every field is optional
/// until [`NewPalette::try_from_draft`] checks them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaletteDraft {
    pub palette_title: Option<String>,
    pub color_1: Option<String>,
    pub color_2: Option<String>,
    pub color_3: Option<String>,
    pub color_4: Option<String>,
    pub color_5: Option<String>,
    pub project_id: Option<i64>,
}

impl NewPalette {
    /// Validate the draft, reporting only the first missing field.
    ///
    /// Field order: palette_title, color_1..color_5, project_id.
    #[track_caller]
    pub fn try_from_draft(draft: PaletteDraft) -> Result<Self> {
        // Struct expressions evaluate in source order, which fixes the check order
        Ok(Self {
            palette_title: required("palette_title", draft.palette_title)?,
            color_1: required("color_1", draft.color_1)?,
            color_2: required("color_2", draft.color_2)?,
            color_3: required("color_3", draft.color_3)?,
            color_4: required("color_4", draft.color_4)?,
            color_5: required("color_5", draft.color_5)?,
            project_id: required("project_id", draft.project_id)?,
        })
    }
}
