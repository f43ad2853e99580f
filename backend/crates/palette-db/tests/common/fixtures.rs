use palette_core::{NewPalette, NewProject};

/// Creates a NewProject with the given name
pub fn create_test_project(project_name: &str) -> NewProject {
    NewProject {
        project_name: project_name.to_string(),
    }
}

/// Creates a NewPalette with black swatches
pub fn create_test_palette(project_id: i64, palette_title: &str) -> NewPalette {
    NewPalette {
        palette_title: palette_title.to_string(),
        color_1: "#000000".to_string(),
        color_2: "#000000".to_string(),
        color_3: "#000000".to_string(),
        color_4: "#000000".to_string(),
        color_5: "#000000".to_string(),
        project_id,
    }
}
