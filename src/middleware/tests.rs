use super::*;
use actix_web::{App, HttpResponse, test, web};
use tempfile::NamedTempFile;

use crate::config::Config;

const PAGE: &str = "<html><body>Down for maintenance</body></html>";

fn page(file: &NamedTempFile, allow: &[&str], deny: &[&str]) -> Arc<MaintenancePage> {
    std::fs::write(file.path(), PAGE).unwrap();
    let config = Config {
        enabled: true,
        filename: file.path().to_str().unwrap().to_string(),
        ip_allow_list: allow.iter().map(|s| s.to_string()).collect(),
        deny_uri: deny.iter().map(|s| s.to_string()).collect(),
        ..Config::default()
    };
    Arc::new(MaintenancePage::new(&config).unwrap())
}

async fn next() -> HttpResponse {
    HttpResponse::Ok().body("next")
}

#[test]
async fn test_allowed_client_reaches_next_handler() {
    let file = NamedTempFile::new().unwrap();
    let app = test::init_service(
        App::new()
            .wrap(MaintenanceGate::new(page(&file, &["10.0.0.0/8"], &[])))
            .default_service(web::to(next)),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/")
        .peer_addr("10.0.0.5:5000".parse().unwrap())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(200, resp.status());
    assert_eq!("next", test::read_body(resp).await);
}

#[test]
async fn test_other_client_gets_maintenance_page() {
    let file = NamedTempFile::new().unwrap();
    let app = test::init_service(
        App::new()
            .wrap(MaintenanceGate::new(page(&file, &["10.0.0.0/8"], &[])))
            .default_service(web::to(next)),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/")
        .peer_addr("203.0.113.9:5000".parse().unwrap())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(503, resp.status());
    assert_eq!(
        "text/html; charset=utf-8",
        resp.headers().get("Content-Type").unwrap()
    );
    assert_eq!(PAGE, test::read_body(resp).await);
}

#[test]
async fn test_forwarded_client_gets_maintenance_page() {
    let file = NamedTempFile::new().unwrap();
    let app = test::init_service(
        App::new()
            .wrap(MaintenanceGate::new(page(&file, &["10.0.0.0/8"], &[])))
            .default_service(web::to(next)),
    )
    .await;

    // The proxy is allowed, the client behind it is not.
    let req = test::TestRequest::get()
        .uri("/")
        .insert_header(("X-Forwarded-For", "203.0.113.9, 10.0.0.1"))
        .peer_addr("10.0.0.1:5000".parse().unwrap())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(503, resp.status());
}

#[test]
async fn test_non_ascii_forwarded_for_gets_maintenance_page() {
    let file = NamedTempFile::new().unwrap();
    let app = test::init_service(
        App::new()
            .wrap(MaintenanceGate::new(page(&file, &["10.0.0.0/8"], &[])))
            .default_service(web::to(next)),
    )
    .await;

    // An allowed proxy forwarding a header that is not an IP must not let the client through.
    let req = test::TestRequest::get()
        .uri("/")
        .insert_header((
            "X-Forwarded-For",
            actix_web::http::header::HeaderValue::from_bytes("é, 203.0.113.9".as_bytes()).unwrap(),
        ))
        .peer_addr("10.0.0.1:5000".parse().unwrap())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(503, resp.status());
}

#[test]
async fn test_denied_uri_overrides_allow_list() {
    let file = NamedTempFile::new().unwrap();
    let app = test::init_service(
        App::new()
            .wrap(MaintenanceGate::new(page(&file, &["10.0.0.0/8"], &["^/api/"])))
            .default_service(web::to(next)),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/api/widgets")
        .peer_addr("10.0.0.5:5000".parse().unwrap())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(503, resp.status());

    let req = test::TestRequest::get()
        .uri("/widgets")
        .peer_addr("10.0.0.5:5000".parse().unwrap())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(200, resp.status());
}

#[test]
async fn test_unreadable_page_reaches_next_handler() {
    let file = NamedTempFile::new().unwrap();
    let page = page(&file, &[], &[]);
    std::fs::remove_file(file.path()).unwrap();

    let app = test::init_service(
        App::new()
            .wrap(MaintenanceGate::new(page))
            .default_service(web::to(next)),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/")
        .peer_addr("203.0.113.9:5000".parse().unwrap())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(200, resp.status());
    assert_eq!("next", test::read_body(resp).await);
}
