use std::fs;
use std::path::PathBuf;

use log::{debug, info, warn};

use actix_web::HttpResponse;
use actix_web::http::StatusCode;
use actix_web::http::header::{CONTENT_TYPE, HeaderValue};

use crate::address::{RequestContext, resolve};
use crate::allow_list::AllowList;
use crate::config::Config;
use crate::deny_uri::DenyUri;
use crate::errors::{ConfigError, MaintenanceError};
use crate::trigger::Trigger;


/// The maintenance page decision engine.
/// Immutable once built, shared by all workers.
#[derive(Clone, Debug)]
pub struct MaintenancePage {
    enabled: bool,
    trigger: Trigger,
    filename: PathBuf,
    status: StatusCode,
    content_type: String,
    allow_list: AllowList,
    deny_uri: DenyUri,
}

impl MaintenancePage {
    /// Create the maintenance page from the configuration.
    /// # Arguments
    /// * `config` - The configuration.
    /// # Returns
    /// * `ConfigError` if the filename is empty or the response code is not a valid status code.
    pub fn new(config: &Config) -> Result<MaintenancePage, ConfigError> {
        if config.filename.is_empty() {
            return Err(ConfigError::EmptyFilename);
        }
        let status = StatusCode::from_u16(config.http_response_code).map_err(|_| {
            ConfigError::InvalidStatusCode {
                code: config.http_response_code,
            }
        })?;

        Ok(MaintenancePage {
            enabled: config.enabled,
            trigger: Trigger::new(config.enabled, Some(config.trigger_filename.as_str())),
            filename: PathBuf::from(&config.filename),
            status,
            content_type: config.http_content_type.clone(),
            allow_list: AllowList::parse(&config.ip_allow_list),
            deny_uri: DenyUri::parse(&config.deny_uri),
        })
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// Whether maintenance mode is active right now.
    pub fn is_active(&self) -> bool {
        self.trigger.is_active()
    }

    /// Whether the request should get the maintenance page, trigger aside.
    /// A denied URI wins over an allowed client address.
    pub fn should_serve(&self, context: &RequestContext) -> bool {
        let address = resolve(context);
        let ignored = self.allow_list.is_ignored(&address);
        let denied = self.deny_uri.is_denied(&context.uri);
        debug!(
            "Client: {} URI: {} ignored: {} denied: {}",
            address, context.uri, ignored, denied
        );
        ignored || denied
    }

    /// Build the maintenance response.
    pub fn render(&self) -> Result<HttpResponse, MaintenanceError> {
        let body = fs::read(&self.filename).map_err(|error| MaintenanceError::ContentRead {
            path: self.filename.display().to_string(),
            error,
        })?;
        let content_type = HeaderValue::from_str(&self.content_type).map_err(|_| {
            MaintenanceError::ResponseWrite {
                path: self.filename.display().to_string(),
                content_type: self.content_type.clone(),
            }
        })?;

        Ok(HttpResponse::build(self.status)
            .insert_header((CONTENT_TYPE, content_type))
            .body(body))
    }

    /// Decide what to do with a request.
    /// # Arguments
    /// * `context` - The request context.
    /// # Returns
    /// * `Some(HttpResponse)` with the maintenance page, or `None` if the request
    ///   should go to the next handler. Failing to build the page also yields `None`.
    pub fn intercept(&self, context: &RequestContext) -> Option<HttpResponse> {
        if !self.is_active() || !self.should_serve(context) {
            return None;
        }

        match self.render() {
            Ok(response) => {
                info!("Serving maintenance page for {}", context.uri);
                Some(response)
            }
            Err(err) => {
                warn!("{}. Forwarding request.", err);
                None
            }
        }
    }
}
