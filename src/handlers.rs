use actix_web::web::Data;
use actix_web::{HttpRequest, HttpResponse};

use crate::address::RequestContext;
use crate::constants::{APPLICATION_JSON, TEXT_PLAIN};
use crate::maintenance::MaintenancePage;
use crate::types::MaintenanceStatus;


/// Decide a forwarded request.
/// # Arguments
/// * `page` - The maintenance page.
/// * `request` - The HTTP request.
/// # Returns
/// * `HttpResponse` - The maintenance page, or `Ok` to let the request through.
pub fn check_forward_auth(page: &MaintenancePage, request: &HttpRequest) -> HttpResponse {
    let context = RequestContext::from_forward_auth(request);
    match page.intercept(&context) {
        Some(response) => response,
        None => HttpResponse::Ok().finish(),
    }
}

/// Traefik forward-auth endpoint.
/// Traefik passes `2xx` responses on to the backend and returns anything else to the client.
#[get("/api/v1/forwardAuth")]
pub async fn forward_auth(page: Data<MaintenancePage>, request: HttpRequest) -> HttpResponse {
    check_forward_auth(&page, &request)
}

/// Get the maintenance state.
pub fn get_status(page: &MaintenancePage) -> HttpResponse {
    HttpResponse::Ok()
        .content_type(APPLICATION_JSON)
        .json(MaintenanceStatus {
            enabled: page.enabled(),
            active: page.is_active(),
        })
}

#[get("/api/v1/status")]
pub async fn status(page: Data<MaintenancePage>) -> HttpResponse {
    get_status(&page)
}

/// Get the health status of the service.
#[get("/api/v1/health")]
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().content_type(TEXT_PLAIN).body("OK")
}
