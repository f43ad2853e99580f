use crate::{CreatePaletteRequest, CreateProjectRequest};

fn full_palette_request() -> CreatePaletteRequest {
    serde_json::from_value(serde_json::json!({
        "palette_title": "X",
        "color_1": "#000000",
        "color_2": "#111111",
        "color_3": "#222222",
        "color_4": "#333333",
        "color_5": "#444444",
    }))
    .unwrap()
}

#[test]
fn test_project_request_with_null_name_is_missing() {
    let req: CreateProjectRequest =
        serde_json::from_value(serde_json::json!({ "project_name": null })).unwrap();

    let err = req.into_new_project().unwrap_err();

    assert_eq!(err.field(), Some("project_name"));
}

#[test]
fn test_palette_request_takes_project_id_from_argument() {
    let palette = full_palette_request().into_new_palette(Some(4)).unwrap();

    assert_eq!(palette.project_id, 4);
    assert_eq!(palette.color_5, "#444444");
}

#[test]
fn test_palette_request_ignores_body_project_id() {
    let req: CreatePaletteRequest = serde_json::from_value(serde_json::json!({
        "palette_title": "X",
        "color_1": "#000000",
        "color_2": "#000000",
        "color_3": "#000000",
        "color_4": "#000000",
        "color_5": "#000000",
        "project_id": 99,
    }))
    .unwrap();

    let palette = req.into_new_palette(Some(2)).unwrap();

    assert_eq!(palette.project_id, 2);
}

#[test]
fn test_palette_request_without_path_project_id_reports_project_id() {
    let err = full_palette_request().into_new_palette(None).unwrap_err();

    assert_eq!(err.field(), Some("project_id"));
}

#[test]
fn test_palette_request_reports_title_before_colors() {
    let req = CreatePaletteRequest {
        palette_title: None,
        color_1: None,
        ..full_palette_request()
    };

    let err = req.into_new_palette(Some(1)).unwrap_err();

    assert_eq!(err.field(), Some("palette_title"));
}
