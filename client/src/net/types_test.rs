use super::*;

#[test]
fn sign_in_response_decodes_camel_case_and_builds_session() {
    let resp: SignInResponse =
        serde_json::from_str(r#"{"jwtToken":"T","email":"a@b.com","roles":["USER"],"employeeId":7}"#).unwrap();
    let session = resp.into_session();
    assert!(session.is_complete());
    assert_eq!(session.token.as_deref(), Some("T"));
    assert_eq!(session.employee_id, Some(7));
}

#[test]
fn sign_in_response_without_employee_id_is_incomplete() {
    let resp: SignInResponse = serde_json::from_str(r#"{"jwtToken":"T","email":"a@b.com","roles":[]}"#).unwrap();
    assert!(!resp.into_session().is_complete());
}

#[test]
fn sign_in_response_with_empty_email_is_incomplete() {
    let response: SignInResponse =
        serde_json::from_str(r#"{"jwtToken":"T","email":"","roles":["USER"],"employeeId":7}"#).unwrap();
    let session = response.into_session();
    assert_eq!(session.email, None);
    assert!(!session.is_complete());
}

#[test]
fn message_response_accepts_numeric_or_string_employee_id() {
    let numeric: MessageResponse = serde_json::from_str(r#"{"message":"ok","employeeId":12}"#).unwrap();
    let text: MessageResponse = serde_json::from_str(r#"{"employeeId":"12"}"#).unwrap();
    assert_eq!(numeric.employee_id.as_deref(), Some("12"));
    assert_eq!(text.employee_id.as_deref(), Some("12"));
}

#[test]
fn application_status_serializes_uppercase() {
    assert_eq!(serde_json::to_string(&ApplicationStatus::Accepted).unwrap(), "\"ACCEPTED\"");
    assert_eq!(ApplicationStatus::Declined.as_str(), "DECLINED");
}

#[test]
fn upload_accepts_exhibition_upload_id_alias() {
    let item: Upload = serde_json::from_str(r#"{"uploadId":"u9","title":"Demo","externalEmployeeId":3}"#).unwrap();
    assert_eq!(item.id, "u9");
    assert_eq!(item.external_employee_id, Some(3));
}

#[test]
fn job_post_request_serializes_camel_case() {
    let req = JobPostRequest { job_type: "Full-time".to_owned(), ..JobPostRequest::default() };
    let json = serde_json::to_value(&req).unwrap();
    assert_eq!(json["jobType"], "Full-time");
    assert!(json.get("skillsRequired").is_some());
}

#[test]
fn leaderboard_entry_full_name_trims() {
    let entry = LeaderboardEntry { first_name: "Ada".to_owned(), ..LeaderboardEntry::default() };
    assert_eq!(entry.full_name(), "Ada");
}
