//! HTTP request entry point
//!
//! Method validation, body size limits, health checks, then render.

use std::net::SocketAddr;
use std::time::Instant;

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Method, Request, Response, Version};

use super::document::{render_document, Envelope, HtmlResponse};
use crate::config::AppState;
use crate::http;
use crate::logger::{self, AccessLogEntry};
use crate::render::{Outcome, RenderError};

/// Path of the route that rendered a response, stored in its extensions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchedRoute(pub String);

/// Main entry point for HTTP request handling
///
/// Render failures are returned to the caller; the connection layer owns
/// turning them into a response and writing the access log.
pub fn handle_request<B>(
    req: &Request<B>,
    state: &AppState,
) -> Result<Response<Full<Bytes>>, RenderError> {
    let method = req.method();
    let path = req.uri().path();

    if let Some(resp) = check_http_method(method, state.config.http.enable_cors) {
        return Ok(resp);
    }
    if let Some(resp) = check_body_size(req, state.config.http.max_body_size) {
        return Ok(resp);
    }
    if let Some(resp) = check_health(path, state) {
        return Ok(resp);
    }

    let document = render_document(&state.context, path)?;
    logger::log_render(path, &document.outcome, document.html.len());
    let route = match &document.outcome {
        Outcome::Matched { path } => Some(MatchedRoute(path.clone())),
        Outcome::Fallback(_) => None,
    };

    let envelope = HtmlResponse {
        not_found_status: state.config.render.not_found_status,
        is_head: *method == Method::HEAD,
    };
    let mut response = envelope.wrap(document);
    if let Some(route) = route {
        response.extensions_mut().insert(route);
    }
    Ok(response)
}

/// Build the access log entry for a finished request
pub fn access_entry<B>(
    req: &Request<B>,
    response: &Response<Full<Bytes>>,
    remote_addr: SocketAddr,
    started: Instant,
) -> AccessLogEntry {
    let mut entry = AccessLogEntry::new(
        remote_addr.ip().to_string(),
        req.method().to_string(),
        req.uri().path().to_string(),
    );
    entry.query = req.uri().query().map(ToString::to_string);
    entry.http_version = version_label(req.version()).to_string();
    entry.status = response.status().as_u16();
    // HEAD responses advertise the document length but send no body
    entry.body_bytes = if req.method() == Method::HEAD {
        0
    } else {
        response
            .headers()
            .get("content-length")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse().ok())
            .unwrap_or(0)
    };
    entry.referer = header_string(req, "referer");
    entry.user_agent = header_string(req, "user-agent");
    entry.route = response
        .extensions()
        .get::<MatchedRoute>()
        .map(|route| route.0.clone());
    entry.request_time = started.elapsed();
    entry
}

/// Check HTTP method and return appropriate response for non-GET/HEAD methods
fn check_http_method(method: &Method, enable_cors: bool) -> Option<Response<Full<Bytes>>> {
    match *method {
        Method::GET | Method::HEAD => None,
        Method::OPTIONS => Some(http::build_options_response(enable_cors)),
        _ => {
            logger::log_warning(&format!("Method not allowed: {method}"));
            Some(http::build_405_response())
        }
    }
}

/// Validate Content-Length header and return 413 if exceeded
fn check_body_size<B>(req: &Request<B>, max_body_size: u64) -> Option<Response<Full<Bytes>>> {
    let content_length = req.headers().get("content-length")?;
    content_length.to_str().map_or_else(
        |_| {
            logger::log_warning("Content-Length header contains non-ASCII characters");
            None
        },
        |size_str| match size_str.parse::<u64>() {
            Ok(size) if size > max_body_size => {
                logger::log_error(&format!(
                    "Request body too large: {size} bytes (max: {max_body_size})"
                ));
                Some(http::build_413_response())
            }
            Err(_) => {
                logger::log_warning(&format!(
                    "Invalid Content-Length value: '{size_str}', skipping size check"
                ));
                None
            }
            _ => None,
        },
    )
}

/// Answer liveness and readiness checks ahead of the route table
fn check_health(path: &str, state: &AppState) -> Option<Response<Full<Bytes>>> {
    let health = &state.config.health;
    if health.enabled && (path == health.liveness_path || path == health.readiness_path) {
        Some(http::build_health_response("ok"))
    } else {
        None
    }
}

fn header_string<B>(req: &Request<B>, name: &str) -> Option<String> {
    req.headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(ToString::to_string)
}

fn version_label(version: Version) -> &'static str {
    match version {
        Version::HTTP_09 => "0.9",
        Version::HTTP_10 => "1.0",
        Version::HTTP_2 => "2",
        Version::HTTP_3 => "3",
        _ => "1.1",
    }
}
