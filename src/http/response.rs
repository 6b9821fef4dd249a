//! HTTP response building module
//!
//! Provides builders for the status codes the SSR server emits.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};

pub const HTML_CONTENT_TYPE: &str = "text/html; charset=utf-8";
const ALLOW: &str = "GET, HEAD, OPTIONS";

/// Build an HTML document response
///
/// HEAD requests get the same headers with an empty body.
pub fn build_html_response(status: u16, document: String, is_head: bool) -> Response<Full<Bytes>> {
    let status = StatusCode::from_u16(status).unwrap_or(StatusCode::OK);
    let content_length = document.len();
    let body = if is_head {
        Bytes::new()
    } else {
        Bytes::from(document)
    };

    Response::builder()
        .status(status)
        .header("Content-Type", HTML_CONTENT_TYPE)
        .header("Content-Length", content_length)
        .body(Full::new(body))
        .unwrap_or_else(|e| {
            log_build_error("HTML", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build 405 Method Not Allowed response
pub fn build_405_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(405)
        .header("Content-Type", "text/plain")
        .header("Allow", ALLOW)
        .body(Full::new(Bytes::from("405 Method Not Allowed")))
        .unwrap_or_else(|e| {
            log_build_error("405", &e);
            Response::new(Full::new(Bytes::from("405 Method Not Allowed")))
        })
}

/// Build 413 Payload Too Large response
pub fn build_413_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(413)
        .header("Content-Type", "text/plain")
        .body(Full::new(Bytes::from("413 Payload Too Large")))
        .unwrap_or_else(|e| {
            log_build_error("413", &e);
            Response::new(Full::new(Bytes::from("413 Payload Too Large")))
        })
}

/// Build 500 Internal Server Error response
pub fn build_500_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(500)
        .header("Content-Type", "text/plain")
        .body(Full::new(Bytes::from("500 Internal Server Error")))
        .unwrap_or_else(|e| {
            log_build_error("500", &e);
            Response::new(Full::new(Bytes::from("500 Internal Server Error")))
        })
}

/// Build OPTIONS response (preflight request)
pub fn build_options_response(enable_cors: bool) -> Response<Full<Bytes>> {
    let mut builder = Response::builder().status(204).header("Allow", ALLOW);

    if enable_cors {
        builder = builder
            .header("Access-Control-Allow-Origin", "*")
            .header("Access-Control-Allow-Methods", ALLOW)
            .header("Access-Control-Allow-Headers", "Content-Type")
            .header("Access-Control-Max-Age", "86400");
    }

    builder.body(Full::new(Bytes::new())).unwrap_or_else(|e| {
        log_build_error("OPTIONS", &e);
        Response::new(Full::new(Bytes::new()))
    })
}

/// Build health check response
pub fn build_health_response(status: &'static str) -> Response<Full<Bytes>> {
    Response::builder()
        .status(200)
        .header("Content-Type", "text/plain")
        .header("Cache-Control", "no-store")
        .body(Full::new(Bytes::from_static(status.as_bytes())))
        .unwrap_or_else(|e| {
            log_build_error("health", &e);
            Response::new(Full::new(Bytes::from_static(status.as_bytes())))
        })
}

/// Log response build error
fn log_build_error(status: &str, error: &hyper::http::Error) {
    crate::logger::log_error(&format!("Failed to build {status} response: {error}"));
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn body_text(resp: Response<Full<Bytes>>) -> String {
        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_html_response() {
        let resp = build_html_response(200, "<!DOCTYPE html><p>hi</p>".to_string(), false);
        assert_eq!(resp.status(), 200);
        assert_eq!(resp.headers()["content-type"], HTML_CONTENT_TYPE);
        assert_eq!(resp.headers()["content-length"], "24");
        assert_eq!(body_text(resp).await, "<!DOCTYPE html><p>hi</p>");
    }

    #[tokio::test]
    async fn test_html_response_head_has_no_body() {
        let resp = build_html_response(404, "<h1>404</h1>".to_string(), true);
        assert_eq!(resp.status(), 404);
        assert_eq!(resp.headers()["content-length"], "12");
        assert_eq!(body_text(resp).await, "");
    }

    #[test]
    fn test_invalid_status_falls_back_to_ok() {
        let resp = build_html_response(1000, String::new(), false);
        assert_eq!(resp.status(), 200);
    }

    #[test]
    fn test_options_cors() {
        let resp = build_options_response(true);
        assert_eq!(resp.status(), 204);
        assert!(resp.headers().contains_key("access-control-allow-origin"));
        assert!(!build_options_response(false)
            .headers()
            .contains_key("access-control-allow-origin"));
    }
}
