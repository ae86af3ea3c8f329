use futures::executor::block_on;

use super::*;
use crate::net::http::Method;
use crate::net::mock::Fixture;
use crate::state::credential_store::{EMPLOYEE_ID_KEY, KeyValueStorage, TOKEN_KEY};

#[test]
fn path_builders_format_ids() {
    assert_eq!(employee_endpoint(12), "/api/employees/12");
    assert_eq!(job_endpoint(3), "/api/jobs/3");
    assert_eq!(application_status_endpoint(5), "/api/applications/5/status");
    assert_eq!(question_endpoint(1), "/api/faq/questions/1");
    assert_eq!(answer_endpoint(2), "/api/faq/answers/2");
    assert_eq!(upload_endpoint("abc"), "/api/uploads/abc");
}

#[test]
fn sign_in_stores_session_and_publishes() {
    let fx = Fixture::signed_out();
    fx.transport.respond(200, r#"{"jwtToken":"T","email":"a@b.com","roles":["USER"],"employeeId":7}"#);

    let session = block_on(fx.client.sign_in("a@b.com", "x")).unwrap();

    assert_eq!(session.token.as_deref(), Some("T"));
    assert!(fx.client.session().is_logged_in());
    assert_eq!(fx.client.session().employee_id(), Some(7));
    assert_eq!(fx.storage.get(TOKEN_KEY).unwrap().as_deref(), Some("T"));

    let sent = fx.transport.last_request();
    assert_eq!(sent.method, Method::Post);
    assert_eq!(sent.path, "/api/auth/login");
    assert_eq!(sent.body, Some(serde_json::json!({"email": "a@b.com", "password": "x"})));
}

#[test]
fn sign_in_without_employee_id_fails_and_stays_signed_out() {
    let fx = Fixture::signed_out();
    fx.transport.respond(200, r#"{"jwtToken":"T","email":"a@b.com","roles":["USER"]}"#);

    let err = block_on(fx.client.sign_in("a@b.com", "x")).unwrap_err();

    assert!(matches!(err, ApiError::Decode(_)));
    assert_eq!(err.status(), None);
    assert!(!fx.client.session().is_logged_in());
    assert_eq!(fx.storage.get(TOKEN_KEY).unwrap(), None);
    assert_eq!(fx.storage.get(EMPLOYEE_ID_KEY).unwrap(), None);
}

#[test]
fn sign_in_bad_credentials_redirects_and_stays_signed_out() {
    let fx = Fixture::signed_out();
    fx.transport.respond(401, r#"{"error":"Invalid credentials"}"#);

    let err = block_on(fx.client.sign_in("a@b.com", "bad")).unwrap_err();

    assert_eq!(err.message(), "Invalid credentials");
    assert!(!fx.client.session().is_logged_in());
}

#[test]
fn register_surfaces_nested_field_errors() {
    let fx = Fixture::signed_out();
    fx.transport.respond(400, r#"{"error":{"email":"Email already in use"}}"#);

    let err = block_on(fx.client.register(&SignUpRequest::default())).unwrap_err();

    assert_eq!(err.field_errors().get("email").map(String::as_str), Some("Email already in use"));
}

#[test]
fn application_status_is_sent_as_query() {
    let fx = Fixture::signed_in(&["MANAGER"]);
    fx.transport.respond(200, "");

    block_on(fx.client.set_application_status(9, ApplicationStatus::Accepted)).unwrap();

    let sent = fx.transport.last_request();
    assert_eq!(sent.method, Method::Put);
    assert_eq!(sent.path, "/api/applications/9/status");
    assert_eq!(sent.query, vec![("status".to_owned(), "ACCEPTED".to_owned())]);
}

#[test]
fn exhibition_filter_sends_one_criterion() {
    let fx = Fixture::signed_in(&["USER"]);
    fx.transport.respond(200, "[]").respond(200, "[]");

    block_on(fx.client.filtered_exhibition(&ExhibitionFilter::EmployeeId(42))).unwrap();
    block_on(fx.client.filtered_exhibition(&ExhibitionFilter::FirstName("Ada".to_owned()))).unwrap();

    let sent = fx.transport.requests();
    assert_eq!(sent[0].query, vec![("externalEmployeeId".to_owned(), "42".to_owned())]);
    assert_eq!(sent[1].query, vec![("firstName".to_owned(), "Ada".to_owned())]);
}

#[test]
fn rate_upload_patches_rating_body() {
    let fx = Fixture::signed_in(&["MANAGER"]);
    fx.transport.respond(200, "");

    block_on(fx.client.rate_upload("u1", 4)).unwrap();

    let sent = fx.transport.last_request();
    assert_eq!(sent.method, Method::Patch);
    assert_eq!(sent.path, "/api/uploads/u1/rate");
    assert_eq!(sent.body, Some(serde_json::json!({"rating": 4})));
}

#[test]
fn leaderboard_preserves_server_order() {
    let fx = Fixture::signed_in(&["USER"]);
    fx.transport.respond(
        200,
        r#"[{"employeeId":2,"firstName":"B","lastName":"Two","averageRating":4.5},
            {"employeeId":1,"firstName":"A","lastName":"One","averageRating":4.9}]"#,
    );

    let entries = block_on(fx.client.leaderboard()).unwrap();

    assert_eq!(entries.iter().map(|e| e.employee_id).collect::<Vec<_>>(), vec![2, 1]);
}
