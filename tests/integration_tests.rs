//! Integration tests against the fully configured application.

use actix_web::{http::StatusCode, test};
use windchill_api::{AppConfig, AppMetrics, MetricsConfig, create_app};

fn config() -> AppConfig {
    AppConfig::default()
}

#[actix_web::test]
async fn test_health_endpoint_integration() {
    let app = test::init_service(create_app(&config(), AppMetrics::new().unwrap())).await;

    let req = test::TestRequest::get().uri("/api/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let content_type = resp
        .headers()
        .get("content-type")
        .and_then(|h| h.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(content_type.contains("application/json"), "{content_type}");

    let json: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(json, serde_json::json!({ "status": "healthy" }));
}

#[actix_web::test]
async fn test_version_endpoint_integration() {
    let app = test::init_service(create_app(&config(), AppMetrics::new().unwrap())).await;

    let req = test::TestRequest::get().uri("/api/version").to_request();
    let json: serde_json::Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    assert!(json["commit"].is_string());
    assert!(json["build_time"].is_string());
}

#[actix_web::test]
async fn test_request_id_is_generated_and_echoed() {
    let app = test::init_service(create_app(&config(), AppMetrics::new().unwrap())).await;

    let req = test::TestRequest::get().uri("/api/health").to_request();
    let resp = test::call_service(&app, req).await;
    let generated = resp.headers().get("x-request-id").unwrap().to_str().unwrap();
    assert!(uuid::Uuid::parse_str(generated).is_ok(), "{generated}");

    let req = test::TestRequest::get()
        .uri("/windchill/v1/berechnung?pt=12&wg=25")
        .insert_header(("X-Request-ID", "client-supplied-id"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        resp.headers().get("x-request-id").unwrap(),
        "client-supplied-id"
    );
}

#[actix_web::test]
async fn test_metrics_endpoint_integration() {
    let app = test::init_service(create_app(&config(), AppMetrics::new().unwrap())).await;

    let req = test::TestRequest::get()
        .uri("/windchill/v1/berechnung?pt=1&wg=25")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = test::TestRequest::get().uri("/api/metrics").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = test::read_body(resp).await;
    let body_str = std::str::from_utf8(&body).unwrap();
    assert!(body_str.contains("http_requests_total"));
    assert!(body_str.contains("route=\"/windchill/v1/berechnung\""));
    assert!(body_str.contains("windchill_calculations_total{outcome=\"success\"} 1"));
    assert!(!body_str.contains("route=\"/api/metrics\""));
}

#[actix_web::test]
async fn test_metrics_endpoint_disabled() {
    let config = AppConfig {
        metrics: MetricsConfig { enabled: false },
        ..AppConfig::default()
    };
    let app = test::init_service(create_app(&config, AppMetrics::new().unwrap())).await;

    let req = test::TestRequest::get().uri("/api/metrics").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
}

#[actix_web::test]
async fn test_unknown_route_is_labelled_unmatched() {
    let metrics = AppMetrics::new().unwrap();
    let app = test::init_service(create_app(&config(), metrics.clone())).await;

    let req = test::TestRequest::get().uri("/nope/123").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let rendered = metrics.render().unwrap();
    assert!(rendered.contains("route=\"unmatched\""));
    assert!(!rendered.contains("/nope/123"));
}

#[actix_web::test]
async fn test_openapi_spec_lists_windchill_route() {
    let app = test::init_service(create_app(&config(), AppMetrics::new().unwrap())).await;

    let req = test::TestRequest::get().uri("/api/spec/v2").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let json: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(json["info"]["title"], "Windchill API");
    assert!(json["paths"].get("/windchill/v1/berechnung").is_some());
}
