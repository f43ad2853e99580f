//! Palette REST API handlers
//!
//! Path ids arrive as strings. One that is not an integer simply matches
//! nothing: 404 on lookups, 422 on delete, and a missing `project_id` on
//! create.

use crate::{
    ApiError, ApiResult, AppState, CreatePaletteRequest, CreatedResponse, JsonBody, parse_id,
};

use palette_core::Palette;
use palette_db::PaletteRepository;

use std::panic::Location;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use error_location::ErrorLocation;
use log::{debug, info};

/// GET /api/v1/palettes/:id
///
/// Responds with the matching rows as a list, or 404 when there are none
pub async fn get_palette(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Vec<Palette>>> {
    let palettes = match parse_id(&id) {
        Some(palette_id) => {
            PaletteRepository::new(state.pool.clone())
                .find_by_id(palette_id)
                .await?
        }
        None => Vec::new(),
    };

    if palettes.is_empty() {
        return Err(ApiError::NotFound {
            message: format!("Could not find palette with id of {}.", id),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    Ok(Json(palettes))
}

/// GET /api/v1/projects/:id/palettes
pub async fn list_project_palettes(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Vec<Palette>>> {
    let palettes = match parse_id(&id) {
        Some(project_id) => {
            PaletteRepository::new(state.pool.clone())
                .find_by_project(project_id)
                .await?
        }
        None => Vec::new(),
    };

    if palettes.is_empty() {
        return Err(ApiError::NotFound {
            message: format!("Could not find any palettes for project id: {}.", id),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    debug!("Project {} has {} palettes", id, palettes.len());

    Ok(Json(palettes))
}

/// POST /api/v1/projects/:id/palettes
///
/// The path id becomes the palette's `project_id`. An unknown project is
/// rejected by the schema and surfaces as a 500.
pub async fn create_palette(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(req): JsonBody<CreatePaletteRequest>,
) -> ApiResult<(StatusCode, Json<CreatedResponse>)> {
    let palette = req.into_new_palette(parse_id(&id))?;

    let repo = PaletteRepository::new(state.pool.clone());
    let palette_id = repo.create(&palette).await?;

    info!(
        "Created palette {} ({}) in project {}",
        palette_id, palette.palette_title, palette.project_id
    );

    Ok((StatusCode::CREATED, Json(CreatedResponse { id: palette_id })))
}

/// DELETE /api/v1/palettes/:id
///
/// 204 when a row was removed, 422 when there was nothing to remove
pub async fn delete_palette(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    let deleted = match parse_id(&id) {
        Some(palette_id) => {
            PaletteRepository::new(state.pool.clone())
                .delete(palette_id)
                .await?
        }
        None => 0,
    };

    if deleted == 0 {
        return Err(ApiError::Validation {
            message: "Not Found".to_string(),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    info!("Deleted palette {}", id);

    Ok(StatusCode::NO_CONTENT)
}
