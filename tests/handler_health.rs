mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use login_gate::api::handlers::health_handler;
use serde_json::Value;

#[tokio::test]
async fn test_health_reports_healthy() {
    let app = Router::new()
        .route("/health", get(health_handler))
        .with_state(common::create_test_state());
    let server = TestServer::new(app).unwrap();

    let response = server.get("/health").await;

    response.assert_status_ok();
    let json = response.json::<Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["checks"]["burner_domains"]["status"], "ok");
    assert!(json["version"].is_string());
}
