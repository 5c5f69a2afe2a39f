use std::sync::{Arc, Mutex};

use super::*;
use crate::net::types::{Role, User};
use crate::state::session::{MemoryStorage, Session};

fn sample_session() -> Session {
    Session {
        token: "tok-abc".to_owned(),
        user: User {
            id: "u1".to_owned(),
            first_name: "Zeynep".to_owned(),
            last_name: "Arslan".to_owned(),
            email: "zeynep@example.com".to_owned(),
            role: Role::Admin,
        },
    }
}

fn recording_client() -> (ApiClient, SessionStore, Arc<Mutex<Vec<String>>>) {
    let session = SessionStore::new(Arc::new(MemoryStorage::default()));
    let recorded = Arc::new(Mutex::new(Vec::new()));
    let sink = recorded.clone();
    let client = ApiClient::new(
        "/api",
        session.clone(),
        Arc::new(move |path: &str| sink.lock().expect("redirect sink").push(path.to_owned())),
    );
    (client, session, recorded)
}

#[test]
fn join_url_normalizes_slashes() {
    assert_eq!(join_url("/api", "/auth/login"), "/api/auth/login");
    assert_eq!(join_url("/api/", "auth/login"), "/api/auth/login");
    assert_eq!(join_url("https://api.derslik.example", "grades"), "https://api.derslik.example/grades");
    assert_eq!(join_url("https://api.derslik.example/", "/grades"), "https://api.derslik.example/grades");
}

#[test]
fn bearer_header_uses_current_token() {
    let (_, session, _) = recording_client();
    session.save(&sample_session());
    assert_eq!(bearer_header(&session, false), Some("Bearer tok-abc".to_owned()));
}

#[test]
fn bearer_header_absent_without_session() {
    let (_, session, _) = recording_client();
    assert_eq!(bearer_header(&session, false), None);
}

#[test]
fn bearer_header_suppressed_by_skip_auth_even_with_session() {
    let (_, session, _) = recording_client();
    session.save(&sample_session());
    assert_eq!(bearer_header(&session, true), None);
}

#[test]
fn unauthorized_status_clears_session_and_redirects_once() {
    let (client, session, recorded) = recording_client();
    session.save(&sample_session());

    client.apply_auth_policy(401);

    assert_eq!(session.load(), None);
    assert_eq!(recorded.lock().expect("redirect sink").as_slice(), ["/login"]);
}

#[test]
fn unauthorized_policy_is_idempotent_across_concurrent_calls() {
    let (client, session, recorded) = recording_client();
    session.save(&sample_session());

    // Two in-flight requests both coming back 401.
    client.apply_auth_policy(401);
    client.apply_auth_policy(401);

    assert_eq!(session.load(), None);
    let calls = recorded.lock().expect("redirect sink");
    assert!(calls.iter().all(|path| path == "/login"));
}

#[test]
fn non_401_statuses_leave_session_untouched() {
    let (client, session, recorded) = recording_client();
    session.save(&sample_session());

    for status in [200u16, 204, 400, 403, 404, 500] {
        client.apply_auth_policy(status);
    }

    assert_eq!(session.load(), Some(sample_session()));
    assert!(recorded.lock().expect("redirect sink").is_empty());
}

#[test]
fn logout_clears_session_and_redirects_to_login() {
    let (client, session, recorded) = recording_client();
    session.save(&sample_session());

    client.logout();

    assert_eq!(session.load(), None);
    assert_eq!(recorded.lock().expect("redirect sink").as_slice(), ["/login"]);
}

#[test]
fn method_names_match_http_verbs() {
    assert_eq!(Method::Get.as_str(), "GET");
    assert_eq!(Method::Post.as_str(), "POST");
    assert_eq!(Method::Patch.as_str(), "PATCH");
    assert_eq!(Method::Delete.as_str(), "DELETE");
}

#[test]
fn api_response_ok_covers_2xx_only() {
    let ok = ApiResponse { status: 201, body: String::new() };
    assert!(ok.ok());
    let redirect = ApiResponse { status: 302, body: String::new() };
    assert!(!redirect.ok());
    let client_err = ApiResponse { status: 404, body: String::new() };
    assert!(!client_err.ok());
}

#[test]
fn api_response_json_defers_parsing_to_the_caller() {
    let response = ApiResponse {
        status: 200,
        body: r#"{"id":"g1","name":"Grade 5"}"#.to_owned(),
    };
    let grade: crate::net::types::Grade = response.json().expect("grade");
    assert_eq!(grade.name, "Grade 5");
    assert!(response.json::<crate::net::types::User>().is_err());
}
