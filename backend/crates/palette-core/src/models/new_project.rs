use crate::{Result, required};

use serde::Serialize;

/// A validated project awaiting insertion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewProject {
    pub project_name: String,
}

impl NewProject {
    /// Build from the raw request field, failing when `project_name` is missing
    #[track_caller]
    pub fn try_new(project_name: Option<String>) -> Result<Self> {
        Ok(Self {
            project_name: required("project_name", project_name)?,
        })
    }
}
