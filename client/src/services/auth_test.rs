use futures::executor::block_on;
use serde_json::json;

use super::*;
use crate::net::http::Method;
use crate::test_support::Harness;

fn service(h: &Harness) -> AuthService {
    AuthService::new(h.client.clone(), h.session.clone())
}

fn credentials() -> LoginRequest {
    LoginRequest { username: "a".to_owned(), password: "b".to_owned() }
}

#[test]
fn login_stores_returned_token() {
    let h = Harness::new();
    h.transport.respond_json(200, &json!({ "token": "xyz" }));
    let auth = service(&h);

    let resp = block_on(auth.login(&credentials())).unwrap();

    assert_eq!(resp.token.as_deref(), Some("xyz"));
    assert_eq!(h.session.get().as_deref(), Some("xyz"));
    assert!(auth.is_authenticated());
    assert_eq!(auth.token().as_deref(), Some("xyz"));
}

#[test]
fn login_posts_credentials_to_auth_login() {
    let h = Harness::new();
    h.transport.respond_json(200, &json!({ "token": "xyz" }));

    block_on(service(&h).login(&credentials())).unwrap();

    let sent = h.transport.last_request();
    assert_eq!(sent.method, Method::Post);
    assert_eq!(sent.path, "/Auth/login");
    let body: serde_json::Value = serde_json::from_str(sent.body.as_deref().unwrap()).unwrap();
    assert_eq!(body, json!({ "username": "a", "password": "b" }));
}

#[test]
fn login_without_token_leaves_session_empty() {
    let h = Harness::new();
    h.transport.respond_json(200, &json!({}));
    let auth = service(&h);

    let resp = block_on(auth.login(&credentials())).unwrap();

    assert!(resp.token.is_none());
    assert!(!auth.is_authenticated());
}

#[test]
fn login_with_empty_token_keeps_previous_credential() {
    let h = Harness::new();
    h.session.set("previous");
    h.transport.respond_json(200, &json!({ "token": "" }));

    block_on(service(&h).login(&credentials())).unwrap();

    assert_eq!(h.session.get().as_deref(), Some("previous"));
}

#[test]
fn rejected_login_clears_credential_and_reloads_login() {
    let h = Harness::new();
    h.session.set("previous");
    h.transport.respond(401, "");
    let auth = service(&h);

    let err = block_on(auth.login(&credentials())).unwrap_err();

    assert!(matches!(err, ApiError::Unauthorized));
    assert!(!auth.is_authenticated());
    assert_eq!(h.navigator.visits(), vec!["/login".to_owned()]);
}

#[test]
fn failed_login_surfaces_error() {
    let h = Harness::new();
    h.transport.respond(400, "bad request");

    let err = block_on(service(&h).login(&credentials())).unwrap_err();

    assert_eq!(err.status(), Some(400));
}

#[test]
fn logout_clears_session() {
    let h = Harness::new();
    h.transport.respond_json(200, &json!({ "token": "xyz" }));
    let auth = service(&h);
    block_on(auth.login(&credentials())).unwrap();

    auth.logout();

    assert!(!auth.is_authenticated());
    assert_eq!(auth.token(), None);
    assert_eq!(h.transport.requests().len(), 1);
}

#[test]
fn is_authenticated_tracks_session_presence() {
    let h = Harness::new();
    let auth = service(&h);
    assert!(!auth.is_authenticated());
    h.session.set("t");
    assert!(auth.is_authenticated());
    h.session.clear();
    assert!(!auth.is_authenticated());
}
