pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;


pub use api::{
    created_response::CreatedResponse,
    error::ApiError,
    error::Result as ApiResult,
    extractors::json_body::JsonBody,
    palettes::{
        create_palette_request::CreatePaletteRequest,
        palettes::{create_palette, delete_palette, get_palette, list_project_palettes},
    },
    path_id::parse_id,
    projects::{
        create_project_request::CreateProjectRequest,
        projects::{create_project, list_projects},
    },
    welcome::{WELCOME_MESSAGE, welcome},
};
pub use app_state::AppState;

pub use crate::routes::build_router;
