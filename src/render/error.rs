// Render error types

use thiserror::Error;

/// Errors raised by a view while producing its markup.
#[derive(Debug, Error)]
pub enum ViewError {
    /// A prop the view needs was not supplied.
    #[error("missing prop: {0}")]
    MissingProp(String),

    /// A prop was supplied with the wrong shape.
    #[error("invalid prop '{name}': expected {expected}")]
    InvalidProp { name: String, expected: &'static str },

    /// Any other view failure.
    #[error("{0}")]
    Failed(String),
}

/// Errors raised while rendering a request.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The router was driven without the named binding in its scope.
    #[error("render scope is missing its {0} binding")]
    MissingScope(&'static str),

    /// The matched view failed.
    #[error("view for route '{path}' failed: {source}")]
    View {
        path: String,
        #[source]
        source: ViewError,
    },
}
