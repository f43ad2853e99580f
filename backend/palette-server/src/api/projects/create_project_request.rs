use palette_core::{NewProject, Result as CoreResult};

use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct CreateProjectRequest {
    /// Required; absent, null and "" are all rejected
    #[serde(default)]
    pub project_name: Option<String>,
}

impl CreateProjectRequest {
    #[track_caller]
    pub fn into_new_project(self) -> CoreResult<NewProject> {
        NewProject::try_new(self.project_name)
    }
}
