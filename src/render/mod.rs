//! Rendering module
//!
//! Turns a `RenderContext` (route table + shared props) and a request URL
//! into an HTML fragment:
//! - Route resolution by exact path match
//! - Explicit render scope carrying the context and URL
//! - Router dispatch to the matched view
//! - Not-found fallbacks

mod error;
pub mod markup;
mod route;
mod router;
mod scope;
mod shell;
mod view;

pub use error::{RenderError, ViewError};
pub use route::{resolve_route, RenderContext, Resolution, Route};
pub use router::Router;
pub use scope::RenderScope;
pub use shell::{render, Fallback, Outcome, Rendered};
pub use view::{Props, View};
