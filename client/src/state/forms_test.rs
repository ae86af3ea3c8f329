use super::*;

#[test]
fn require_flags_only_blank_fields() {
    let errors = require(&[("title", "Title", "  "), ("location", "Location", "Remote")]);
    assert_eq!(errors.field("title"), Some("Title is required."));
    assert_eq!(errors.field("location"), None);
}

#[test]
fn validation_error_maps_to_fields() {
    let mut fields = BTreeMap::new();
    fields.insert("title".to_owned(), "Title required".to_owned());
    let errors = FormErrors::from_api(&ApiError::Validation { fields });
    assert_eq!(errors.field("title"), Some("Title required"));
    assert_eq!(errors.general, None);
}

#[test]
fn other_errors_map_to_general_message() {
    let errors = FormErrors::from_api(&ApiError::General { status: 500, message: "Boom".to_owned() });
    assert!(errors.fields.is_empty());
    assert_eq!(errors.general.as_deref(), Some("Boom"));
}
