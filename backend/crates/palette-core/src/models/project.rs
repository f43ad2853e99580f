//! Project entity - a named collection of palettes.

use serde::{Deserialize, Serialize};

/// A project as stored. The id is assigned by the store on insert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: i64,
    pub project_name: String,
}
