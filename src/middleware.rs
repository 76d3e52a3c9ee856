use std::future::{Ready, ready};
use std::sync::Arc;

use actix_web::Error;
use actix_web::body::EitherBody;
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready};

use futures_util::future::LocalBoxFuture;

use crate::address::RequestContext;
use crate::maintenance::MaintenancePage;

#[cfg(test)]
mod tests;

/// Middleware serving the maintenance page in front of the wrapped service.
/// # Example
/// ```no_run
/// use std::sync::Arc;
/// use actix_web::{App, HttpResponse, web};
/// use traefik_maintenance::config::Config;
/// use traefik_maintenance::maintenance::MaintenancePage;
/// use traefik_maintenance::middleware::MaintenanceGate;
///
/// let config = Config {
///     enabled: true,
///     filename: "/srv/maintenance.html".to_string(),
///     ..Config::default()
/// };
/// let page = Arc::new(MaintenancePage::new(&config).unwrap());
/// let app = App::new()
///     .wrap(MaintenanceGate::new(page))
///     .default_service(web::to(|| async { HttpResponse::Ok().finish() }));
/// ```
#[derive(Clone)]
pub struct MaintenanceGate {
    page: Arc<MaintenancePage>,
}

impl MaintenanceGate {
    pub fn new(page: Arc<MaintenancePage>) -> MaintenanceGate {
        MaintenanceGate { page }
    }
}

impl<S, B> Transform<S, ServiceRequest> for MaintenanceGate
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = MaintenanceMiddleware<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(MaintenanceMiddleware {
            service,
            page: self.page.clone(),
        }))
    }
}

pub struct MaintenanceMiddleware<S> {
    service: S,
    page: Arc<MaintenancePage>,
}

impl<S, B> Service<ServiceRequest> for MaintenanceMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, request: ServiceRequest) -> Self::Future {
        let context = RequestContext::from_request(request.request());

        if let Some(response) = self.page.intercept(&context) {
            let response = request.into_response(response).map_into_right_body();
            return Box::pin(async move { Ok(response) });
        }

        // Forward the untouched request to the next handler.
        let next = self.service.call(request);
        Box::pin(async move { next.await.map(ServiceResponse::map_into_left_body) })
    }
}
