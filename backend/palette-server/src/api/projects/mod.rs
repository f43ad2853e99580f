pub mod create_project_request;
#[allow(clippy::module_inception)]
pub mod projects;
