mod common;

use axum::http::StatusCode;
use axum::{Router, routing::get};
use axum_test::TestServer;
use axum_test::multipart::MultipartForm;
use login_gate::api::handlers::login_action_handler;
use login_gate::web::handlers::login_page_handler;
use serde_json::Value;

fn login_server() -> TestServer {
    let app = Router::new()
        .route("/login", get(login_page_handler).post(login_action_handler))
        .with_state(common::create_test_state());

    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_login_page_renders_form() {
    let server = login_server();

    let response = server.get("/login").await;

    response.assert_status_ok();
    let body = response.text();
    assert!(body.contains("name=\"email\""));
    assert!(body.contains("type=\"email\""));
    assert!(body.contains("data-submit"));
}

#[tokio::test]
async fn test_login_page_needs_no_burner_lookup() {
    // The rendering side must work without any state at all; the burner
    // lookup is reachable only from the POST action.
    let app = Router::new().route("/login", get(login_page_handler));
    let server = TestServer::new(app).unwrap();

    let response = server.get("/login").await;

    response.assert_status_ok();
}

#[tokio::test]
async fn test_valid_email_is_accepted() {
    let server = login_server();

    let response = server
        .post("/login")
        .form(&[("email", "user@example.com")])
        .await;

    response.assert_status_ok();
    let json = response.json::<Value>();
    assert_eq!(json["data"]["email"], "user@example.com");
}

#[tokio::test]
async fn test_malformed_email_is_rejected() {
    let server = login_server();

    let response = server
        .post("/login")
        .form(&[("email", "not-an-email")])
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    let json = response.json::<Value>();
    assert_eq!(json["errors"]["email"], "invalid email");
    assert_eq!(json["submitted"]["email"], "not-an-email");
}

#[tokio::test]
async fn test_burner_domain_is_rejected() {
    let server = login_server();

    let response = server
        .post("/login")
        .form(&[("email", "user@mailinator.com")])
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    let json = response.json::<Value>();
    assert_eq!(
        json["errors"]["email"],
        "Sorry, we don't support this email provider."
    );
    assert_eq!(json["submitted"]["email"], "user@mailinator.com");
}

#[tokio::test]
async fn test_burner_domain_match_ignores_case() {
    let server = login_server();

    let response = server
        .post("/login")
        .form(&[("email", "user@MAILINATOR.COM")])
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    let json = response.json::<Value>();
    assert_eq!(
        json["errors"]["email"],
        "Sorry, we don't support this email provider."
    );
}

#[tokio::test]
async fn test_missing_email_field_is_rejected() {
    let server = login_server();

    let response = server.post("/login").form(&[("name", "ursula")]).await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    let json = response.json::<Value>();
    assert_eq!(json["errors"]["email"], "invalid email");
    // The submitted values are echoed even when the email field is absent.
    assert_eq!(json["submitted"]["name"], "ursula");
}

#[tokio::test]
async fn test_multipart_submission_is_accepted() {
    let server = login_server();

    let form = MultipartForm::new().add_text("email", "user@example.com");
    let response = server.post("/login").multipart(form).await;

    response.assert_status_ok();
    let json = response.json::<Value>();
    assert_eq!(json["data"]["email"], "user@example.com");
}

#[tokio::test]
async fn test_multipart_burner_domain_is_rejected() {
    let server = login_server();

    let form = MultipartForm::new().add_text("email", "user@yopmail.com");
    let response = server.post("/login").multipart(form).await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    let json = response.json::<Value>();
    assert_eq!(
        json["errors"]["email"],
        "Sorry, we don't support this email provider."
    );
}

#[tokio::test]
async fn test_json_body_is_unsupported() {
    let server = login_server();

    let response = server
        .post("/login")
        .json(&serde_json::json!({ "email": "user@example.com" }))
        .await;

    response.assert_status(StatusCode::UNSUPPORTED_MEDIA_TYPE);
    let json = response.json::<Value>();
    assert_eq!(json["error"]["code"], "unsupported_media_type");
}

#[tokio::test]
async fn test_repeated_submission_yields_identical_results() {
    let server = login_server();

    let first = server
        .post("/login")
        .form(&[("email", "user@mailinator.com")])
        .await;
    let second = server
        .post("/login")
        .form(&[("email", "user@mailinator.com")])
        .await;

    first.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    second.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(first.json::<Value>(), second.json::<Value>());
}
