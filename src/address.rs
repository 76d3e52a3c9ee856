use actix_web::HttpRequest;

use crate::constants::{X_FORWARDED_FOR, X_FORWARDED_URI, X_REAL_IP};


/// The parts of a request the maintenance decision looks at.
#[derive(Clone, Debug, Default)]
pub struct RequestContext {
    /// The `X-Real-Ip` header value.
    pub real_ip: Option<String>,
    /// The `X-Forwarded-For` header value.
    pub forwarded_for: Option<String>,
    /// The raw peer address, usually `ip:port`.
    pub peer_addr: String,
    /// The request URI (path and query).
    pub uri: String,
}

fn header_value(request: &HttpRequest, name: &str) -> Option<String> {
    request
        .headers()
        .get(name)
        .map(|value| String::from_utf8_lossy(value.as_bytes()).into_owned())
        .filter(|value| !value.is_empty())
}

impl RequestContext {
    /// Build the context from a request passing through the middleware.
    pub fn from_request(request: &HttpRequest) -> RequestContext {
        RequestContext {
            real_ip: header_value(request, X_REAL_IP),
            forwarded_for: header_value(request, X_FORWARDED_FOR),
            peer_addr: request
                .peer_addr()
                .map(|addr| addr.to_string())
                .unwrap_or_default(),
            uri: request.uri().to_string(),
        }
    }

    /// Build the context from a Traefik forward-auth request.
    /// The forwarded request's URI is taken from `X-Forwarded-Uri` when Traefik sends it.
    pub fn from_forward_auth(request: &HttpRequest) -> RequestContext {
        let mut context = RequestContext::from_request(request);
        if let Some(uri) = header_value(request, X_FORWARDED_URI) {
            context.uri = uri;
        }
        context
    }
}

/// Strip a trailing `:port` from a peer address.
/// Everything after the last colon is removed; strings without a colon are returned unchanged.
pub fn strip_port(addr: &str) -> &str {
    match addr.rfind(':') {
        Some(idx) => &addr[..idx],
        None => addr,
    }
}

/// Resolve the effective client address of a request.
/// # Arguments
/// * `context` - The request context.
/// # Returns
/// * The first `X-Forwarded-For` entry if present, else `X-Real-Ip`,
///   else the peer address without its port. May be empty or not an IP at all.
pub fn resolve(context: &RequestContext) -> String {
    let real_ip = context.real_ip.as_deref().unwrap_or("");
    let forwarded_for = context.forwarded_for.as_deref().unwrap_or("");

    if real_ip.is_empty() && forwarded_for.is_empty() {
        let host = strip_port(&context.peer_addr);
        // Bracketed IPv6 peers look like `[::1]:5000`.
        return host
            .strip_prefix('[')
            .and_then(|host| host.strip_suffix(']'))
            .unwrap_or(host)
            .to_string();
    }

    if !forwarded_for.is_empty() {
        return forwarded_for
            .split(',')
            .map(str::trim)
            .next()
            .unwrap_or("")
            .to_string();
    }

    real_ip.to_string()
}
