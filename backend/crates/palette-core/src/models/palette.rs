//! Palette entity - five colors with a title, owned by a project.

use serde::{Deserialize, Serialize};

/// A palette as stored.
///
/// Colors are hex strings such as `#01084f`; they are kept verbatim and
/// never parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    pub id: i64,
    pub palette_title: String,
    pub color_1: String,
    pub color_2: String,
    pub color_3: String,
    pub color_4: String,
    pub color_5: String,
    /// References `Project::id`; enforced by the schema's foreign key
    pub project_id: i64,
}
