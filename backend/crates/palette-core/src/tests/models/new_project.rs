use crate::{CoreError, NewProject};

#[test]
fn given_project_name_when_try_new_then_ok() {
    let project = NewProject::try_new(Some("Example".to_string())).unwrap();

    assert_eq!(project.project_name, "Example");
}

#[test]
fn given_no_project_name_when_try_new_then_missing_field() {
    let result = NewProject::try_new(None);

    assert!(matches!(
        result,
        Err(CoreError::MissingField {
            field: "project_name",
            ..
        })
    ));
}

#[test]
fn given_empty_project_name_when_try_new_then_missing_field() {
    let err = NewProject::try_new(Some(String::new())).unwrap_err();

    assert_eq!(err.field(), Some("project_name"));
    assert_eq!(err.message(), "You are missing the project_name property.");
}
