//! Router tests, driven in-process

use std::path::Path;
use std::time::Duration;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    response::Response,
    Router,
};
use serde_json::{json, Value};
use tempfile::TempDir;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tower::ServiceExt;

use safety_guard_core::logic::leak::LOOKUP_FAILED_MESSAGE;
use safety_guard_core::logic::probe::ProbeTarget;
use safety_guard_core::FeedConfig;

use crate::config::Config;
use crate::{create_router, AppState};

/// Address nothing listens on
const UNREACHABLE: &str = "http://127.0.0.1:1";

fn test_config(data_dir: &Path) -> Config {
    Config {
        port: 0,
        environment: "test".to_string(),
        credentials: vec![("admin".to_string(), "password123".to_string())],
        session_secret: "test-secret".to_string(),
        session_hours: 168,
        feeds: FeedConfig {
            apps_url: String::new(),
            status_url: String::new(),
            dashboard_url: String::new(),
        },
        report_form_url: format!("{}/formResponse", UNREACHABLE),
        visitor_data_file: data_dir.join("visitors.json"),
        probe_timeout: Duration::from_millis(200),
        probe_targets: vec![ProbeTarget::new("Offline", UNREACHABLE)],
        ooni_country: "MM".to_string(),
        ooni_overview_url: UNREACHABLE.to_string(),
        ip_primary_url: UNREACHABLE.to_string(),
        ip_fallback_url: UNREACHABLE.to_string(),
        dns_resolver_url: String::new(),
        http_timeout_secs: 2,
    }
}

fn app(dir: &TempDir) -> Router {
    app_with(test_config(dir.path()))
}

fn app_with(config: Config) -> Router {
    create_router(AppState::new(config).unwrap())
}

/// Serve one `200 OK` on a local port, returning `http://host:port`
async fn serve_once(body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut buf = [0u8; 4096];
        let _ = socket.read(&mut buf).await;
        let response = format!(
            "HTTP/1.1 200 OK\r\nContent-Type: text/html\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            body.len(),
            body
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.ok();
    });

    format!("http://{}", addr)
}

async fn json_body(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Log in and return the `name=value` part of the session cookie
async fn login(app: &Router) -> String {
    let response = app
        .clone()
        .oneshot(post_json("/api/login", json!({"username": "admin", "password": "password123"})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let cookie = response.headers()[header::SET_COOKIE].to_str().unwrap().to_string();
    cookie.split(';').next().unwrap().to_string()
}

fn authed_get(uri: &str, cookie: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .header(header::COOKIE, cookie)
        .body(Body::empty())
        .unwrap()
}

fn authed_post(uri: &str, cookie: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::COOKIE, cookie)
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn test_health() {
    let dir = TempDir::new().unwrap();
    let response = app(&dir)
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["status"], "healthy");
    assert!(body["feeds"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_login_sets_session_cookie() {
    let dir = TempDir::new().unwrap();
    let response = app(&dir)
        .oneshot(post_json("/api/login", json!({"username": "admin", "password": "password123"})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let cookie = response.headers()[header::SET_COOKIE].to_str().unwrap().to_string();
    assert!(cookie.starts_with("auth_token="));
    assert!(cookie.contains("HttpOnly"));
    assert!(cookie.contains("SameSite=Strict"));
    assert!(cookie.contains("Max-Age=604800"));
    assert!(!cookie.contains("Secure"));
    assert_eq!(json_body(response).await, json!({"success": true}));
}

#[tokio::test]
async fn test_login_rejects_bad_password() {
    let dir = TempDir::new().unwrap();
    let response = app(&dir)
        .oneshot(post_json("/api/login", json!({"username": "admin", "password": "nope"})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert!(response.headers().get(header::SET_COOKIE).is_none());
    assert_eq!(json_body(response).await, json!({"success": false}));
}

#[tokio::test]
async fn test_logout_clears_cookie() {
    let dir = TempDir::new().unwrap();
    let response = app(&dir)
        .oneshot(post_json("/api/logout", json!({})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let cookie = response.headers()[header::SET_COOKIE].to_str().unwrap();
    assert!(cookie.starts_with("auth_token=;"));
    assert!(cookie.contains("Max-Age=0"));
}

#[tokio::test]
async fn test_data_routes_require_session() {
    let dir = TempDir::new().unwrap();
    let app = app(&dir);

    let response = app
        .clone()
        .oneshot(Request::builder().uri("/api/v1/guide").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(json_body(response).await["status"], 401);

    let forged = app
        .oneshot(authed_get("/api/v1/guide", "auth_token=valid_session"))
        .await
        .unwrap();
    assert_eq!(forged.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_app_search_uses_curated_fallback() {
    let dir = TempDir::new().unwrap();
    let app = app(&dir);
    let cookie = login(&app).await;

    let response = app
        .clone()
        .oneshot(authed_get("/api/v1/apps?q=proton", &cookie))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    assert_eq!(body["state"], "disabled");
    assert_eq!(body["total"], 15);
    assert_eq!(body["lookup"]["kind"], "matches");
    assert_eq!(body["lookup"]["apps"][0]["name"], "Proton VPN");

    let unknown = json_body(
        app.oneshot(authed_get("/api/v1/apps?q=definitely-not-listed", &cookie))
            .await
            .unwrap(),
    )
    .await;
    assert_eq!(unknown["lookup"]["kind"], "unknown");
    assert_eq!(unknown["lookup"]["risk"], "UNSAFE");
}

#[tokio::test]
async fn test_protocols() {
    let dir = TempDir::new().unwrap();
    let app = app(&dir);
    let cookie = login(&app).await;

    let list = json_body(app.clone().oneshot(authed_get("/api/v1/protocols", &cookie)).await.unwrap()).await;
    assert_eq!(list.as_array().unwrap().len(), 6);

    let wireguard = app
        .clone()
        .oneshot(authed_get("/api/v1/protocols/WireGuard", &cookie))
        .await
        .unwrap();
    assert_eq!(wireguard.status(), StatusCode::OK);
    assert_eq!(json_body(wireguard).await["key"], "wireguard");

    let missing = app
        .oneshot(authed_get("/api/v1/protocols/pptp", &cookie))
        .await
        .unwrap();
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_community_views_with_disabled_sheets() {
    let dir = TempDir::new().unwrap();
    let app = app(&dir);
    let cookie = login(&app).await;

    let status = json_body(
        app.clone()
            .oneshot(authed_get("/api/v1/community/status?isp=Mytel", &cookie))
            .await
            .unwrap(),
    )
    .await;
    assert_eq!(status["state"], "disabled");
    assert_eq!(status["selected_isp"], "Mytel");
    assert!(status["vpns"].as_array().unwrap().is_empty());

    let dashboard = json_body(
        app.clone()
            .oneshot(authed_get("/api/v1/community/dashboard", &cookie))
            .await
            .unwrap(),
    )
    .await;
    assert_eq!(dashboard["grid"]["region"], "Yangon");
    assert_eq!(dashboard["grid"]["rows"].as_array().unwrap().len(), 8);
    assert_eq!(dashboard["grid"]["rows"][0]["cells"][0]["status"], "OK");

    let bad_region = app
        .oneshot(authed_get("/api/v1/community/dashboard?region=Atlantis", &cookie))
        .await
        .unwrap();
    assert_eq!(bad_region.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_leak_check() {
    let dir = TempDir::new().unwrap();
    let app = app(&dir);
    let cookie = login(&app).await;

    let request = Request::builder()
        .method("POST")
        .uri("/api/v1/leak-check")
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::COOKIE, &cookie)
        .body(Body::from(
            json!({
                "candidates": ["candidate:1 1 udp 2122260223 192.168.1.20 61000 typ host"],
                "public_ip": "203.0.113.7"
            })
            .to_string(),
        ))
        .unwrap();

    let body = json_body(app.oneshot(request).await.unwrap()).await;
    assert_eq!(body["status"], "LEAK");
    assert_eq!(body["ips"], json!(["192.168.1.20"]));
}

#[tokio::test]
async fn test_visitor_count_records_unique_ips() {
    let dir = TempDir::new().unwrap();
    let app = app(&dir);

    let visit = |ip: &'static str| {
        Request::builder()
            .method("POST")
            .uri("/api/visitor-count")
            .header("X-Forwarded-For", ip)
            .body(Body::empty())
            .unwrap()
    };

    let first = json_body(app.clone().oneshot(visit("198.51.100.1, 10.0.0.1")).await.unwrap()).await;
    assert_eq!(first["new"], true);

    let again = json_body(app.clone().oneshot(visit("198.51.100.1")).await.unwrap()).await;
    assert_eq!(again["new"], false);

    let count = json_body(
        app.oneshot(Request::builder().uri("/api/visitor-count").body(Body::empty()).unwrap())
            .await
            .unwrap(),
    )
    .await;
    assert!(count["count"].as_u64().unwrap() >= 500);
    assert!(dir.path().join("visitors.json").exists());
}

#[tokio::test]
async fn test_report_validation_and_upstream_failure() {
    let dir = TempDir::new().unwrap();
    let app = app(&dir);

    let invalid = app
        .clone()
        .oneshot(post_json(
            "/api/report",
            json!({"protocol": "", "region": "Yangon", "isp": "Mytel", "internetType": "Wi-Fi"}),
        ))
        .await
        .unwrap();
    assert_eq!(invalid.status(), StatusCode::BAD_REQUEST);

    let unreachable = app
        .oneshot(post_json(
            "/api/report",
            json!({"protocol": "WireGuard", "region": "Yangon", "isp": "Mytel", "internetType": "Wi-Fi"}),
        ))
        .await
        .unwrap();
    assert_eq!(unreachable.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json_body(unreachable).await["success"], false);
}

#[tokio::test]
async fn test_ip_info_reports_fixed_message_when_providers_fail() {
    let dir = TempDir::new().unwrap();
    let app = app(&dir);
    let cookie = login(&app).await;

    let response = app.oneshot(authed_get("/api/v1/ip-info", &cookie)).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let body = json_body(response).await;
    assert_eq!(body["error"], LOOKUP_FAILED_MESSAGE);
    assert_eq!(body["status"], 502);
}

#[tokio::test]
async fn test_censorship_check_probes_configured_targets() {
    let dir = TempDir::new().unwrap();
    let reachable = serve_once("<html></html>").await;

    let mut config = test_config(dir.path());
    config.probe_targets = vec![
        ProbeTarget::new("Local", reachable),
        ProbeTarget::new("Offline", UNREACHABLE),
    ];
    let app = app_with(config);
    let cookie = login(&app).await;

    let response = app
        .oneshot(authed_post("/api/v1/censorship-check", &cookie))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    let results = body["results"].as_array().unwrap();
    assert_eq!(results.len(), 2);
    assert_eq!(results[0]["name"], "Local");
    assert_eq!(results[0]["status"], "ACCESSIBLE");
    assert_eq!(results[1]["name"], "Offline");
    assert_eq!(results[1]["status"], "BLOCKED");
    assert_eq!(body["accessible"], 1);
    assert_eq!(body["blocked"], 1);
    assert!(body["advice"].as_str().unwrap().starts_with("Some sites are blocked"));
}

#[tokio::test]
async fn test_ooni_unreachable_is_muted() {
    let dir = TempDir::new().unwrap();
    let app = app(&dir);
    let cookie = login(&app).await;

    let response = app.oneshot(authed_get("/api/v1/ooni", &cookie)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    assert_eq!(body["country"], "MM");
    assert_eq!(body["state"], "unavailable");
    assert!(body["stats"].is_null());
    assert!(body["explorer_url"].as_str().unwrap().contains("MM"));
}
