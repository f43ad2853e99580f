use crate::{NewPalette, PaletteDraft};

fn complete_draft() -> PaletteDraft {
    PaletteDraft {
        palette_title: Some("Cool Sunset".to_string()),
        color_1: Some("#01084f".to_string()),
        color_2: Some("#391954".to_string()),
        color_3: Some("#631e50".to_string()),
        color_4: Some("#a73c5a".to_string()),
        color_5: Some("#ff7954".to_string()),
        project_id: Some(1),
    }
}

#[test]
fn given_complete_draft_when_validated_then_all_fields_copied() {
    let palette = NewPalette::try_from_draft(complete_draft()).unwrap();

    assert_eq!(palette.palette_title, "Cool Sunset");
    assert_eq!(palette.color_1, "#01084f");
    assert_eq!(palette.color_5, "#ff7954");
    assert_eq!(palette.project_id, 1);
}

#[test]
fn given_empty_draft_when_validated_then_reports_palette_title_first() {
    let err = NewPalette::try_from_draft(PaletteDraft::default()).unwrap_err();

    assert_eq!(err.field(), Some("palette_title"));
}

#[test]
fn given_several_missing_colors_when_validated_then_reports_lowest_color_only() {
    let draft = PaletteDraft {
        color_2: None,
        color_4: Some(String::new()),
        ..complete_draft()
    };

    let err = NewPalette::try_from_draft(draft).unwrap_err();

    assert_eq!(err.field(), Some("color_2"));
}

#[test]
fn given_missing_project_id_when_validated_then_reports_project_id() {
    let draft = PaletteDraft {
        project_id: None,
        ..complete_draft()
    };

    let err = NewPalette::try_from_draft(draft).unwrap_err();

    assert_eq!(err.field(), Some("project_id"));
    assert_eq!(err.message(), "You are missing the project_id property.");
}
