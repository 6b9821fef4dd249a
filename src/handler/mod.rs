//! Request handler module
//!
//! Wraps rendered markup into a document and hands it to a transport
//! envelope. The HTTP entry point adds method, body size and health checks
//! in front of the render.

pub mod document;
pub mod request;

// Re-export main entry points
pub use document::{handle, render_document, BareString, Document, Envelope, HtmlResponse, DOCTYPE};
pub use request::{access_entry, handle_request, MatchedRoute};
