use super::*;

fn fields(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect()
}

#[test]
fn flat_field_map_on_400_is_validation() {
    let err = normalize_error(400, r#"{"title":"Title required"}"#);
    assert_eq!(err, ApiError::Validation { fields: fields(&[("title", "Title required")]) });
    assert_eq!(err.field_errors().get("title").map(String::as_str), Some("Title required"));
}

#[test]
fn field_map_nested_under_error_is_validation() {
    let err = normalize_error(400, r#"{"error":{"email":"Email already registered"}}"#);
    assert_eq!(err, ApiError::Validation { fields: fields(&[("email", "Email already registered")]) });
}

#[test]
fn error_string_is_general_message() {
    let err = normalize_error(400, r#"{"error":"Invalid OTP"}"#);
    assert_eq!(err, ApiError::General { status: 400, message: "Invalid OTP".to_owned() });
}

#[test]
fn message_string_is_general_message() {
    let err = normalize_error(500, r#"{"message":"Database unavailable","status":500}"#);
    assert_eq!(err, ApiError::General { status: 500, message: "Database unavailable".to_owned() });
}

#[test]
fn plain_text_body_is_general_message() {
    let err = normalize_error(404, "Employee not found");
    assert_eq!(err, ApiError::General { status: 404, message: "Employee not found".to_owned() });
    assert!(err.is_not_found());
}

#[test]
fn empty_5xx_body_gets_fallback() {
    let err = normalize_error(502, "");
    assert!(matches!(err, ApiError::General { status: 502, ref message } if message.contains("502")));
}

#[test]
fn unauthorized_keeps_backend_message() {
    let err = normalize_error(401, r#"{"error":"Bad credentials"}"#);
    assert_eq!(err, ApiError::Unauthorized { status: 401, message: Some("Bad credentials".to_owned()) });
    assert_eq!(err.to_string(), "Bad credentials");
}

#[test]
fn forbidden_without_body_has_default_message() {
    let err = normalize_error(403, "");
    assert!(err.is_forbidden());
    assert!(err.to_string().contains("sign in again"));
}

#[test]
fn non_string_object_on_400_is_general() {
    let err = normalize_error(400, r#"{"count":3}"#);
    assert!(matches!(err, ApiError::General { status: 400, .. }));
}

#[test]
fn validation_display_joins_messages() {
    let err = ApiError::Validation { fields: fields(&[("a", "A bad."), ("b", "B bad.")]) };
    assert_eq!(err.to_string(), "A bad. B bad.");
}
