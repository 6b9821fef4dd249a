// Document rendering and output envelopes
// One render path; the envelope decides how the document leaves the process.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;

use crate::http;
use crate::render::{self, Outcome, RenderContext, RenderError};

/// Marker prepended to every rendered document
pub const DOCTYPE: &str = "<!DOCTYPE html>";

/// A complete HTML document ready to be sent
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub html: String,
    pub outcome: Outcome,
}

impl Document {
    pub const fn is_fallback(&self) -> bool {
        matches!(self.outcome, Outcome::Fallback(_))
    }
}

/// Render `url` against `context` and prefix the doctype
pub fn render_document(context: &RenderContext, url: &str) -> Result<Document, RenderError> {
    let rendered = render::render(context, url)?;
    let mut html = String::with_capacity(DOCTYPE.len() + rendered.markup.len());
    html.push_str(DOCTYPE);
    html.push_str(&rendered.markup);
    Ok(Document {
        html,
        outcome: rendered.outcome,
    })
}

/// Transport-specific wrapping of a rendered document
pub trait Envelope {
    type Output;

    fn wrap(&self, document: Document) -> Self::Output;
}

/// Bare string output with no response metadata
#[derive(Debug, Clone, Copy, Default)]
pub struct BareString;

impl Envelope for BareString {
    type Output = String;

    fn wrap(&self, document: Document) -> String {
        document.html
    }
}

/// HTTP response output: 200 with an HTML content type
#[derive(Debug, Clone, Copy)]
pub struct HtmlResponse {
    /// Status used when the document is a not-found fallback
    pub not_found_status: u16,
    /// Omit the body, keep the headers
    pub is_head: bool,
}

impl Default for HtmlResponse {
    fn default() -> Self {
        Self {
            not_found_status: 200,
            is_head: false,
        }
    }
}

impl Envelope for HtmlResponse {
    type Output = Response<Full<Bytes>>;

    fn wrap(&self, document: Document) -> Self::Output {
        let status = if document.is_fallback() {
            self.not_found_status
        } else {
            200
        };
        http::build_html_response(status, document.html, self.is_head)
    }
}

/// Render and wrap in one call
pub fn handle<E: Envelope>(
    context: &RenderContext,
    url: &str,
    envelope: &E,
) -> Result<E::Output, RenderError> {
    render_document(context, url).map(|document| envelope.wrap(document))
}
