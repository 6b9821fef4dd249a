//! HTTP protocol layer module
//!
//! Response builders shared by the request handler and the connection layer,
//! decoupled from rendering.

pub mod response;

// Re-export commonly used builders
pub use response::{
    build_405_response, build_413_response, build_500_response, build_health_response,
    build_html_response, build_options_response,
};
