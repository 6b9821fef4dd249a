// Router
// Reads the render scope and dispatches to the matched view

use super::error::RenderError;
use super::route::{resolve_route, Resolution};
use super::scope::RenderScope;
use super::shell::{Fallback, Rendered};

/// Dispatches a render scope to the view bound to its URL.
pub struct Router;

impl Router {
    /// Resolve the scope's URL against its own route table and dispatch.
    pub fn render(scope: &RenderScope<'_>) -> Result<Rendered, RenderError> {
        let context = scope.context()?;
        let url = scope.url()?;
        Self::dispatch(scope, resolve_route(&context.routes, url))
    }

    /// Dispatch an already resolved route.
    ///
    /// Both scope bindings must be established even though only the props
    /// are read here; a partially built scope is a caller bug.
    pub fn dispatch(
        scope: &RenderScope<'_>,
        resolution: Resolution<'_>,
    ) -> Result<Rendered, RenderError> {
        let context = scope.context()?;
        scope.url()?;

        match resolution {
            Resolution::NotFound => Ok(Rendered::fallback(Fallback::RouterNotFound)),
            Resolution::Matched(route) => {
                let markup = route
                    .view
                    .render(&context.props)
                    .map_err(|source| RenderError::View {
                        path: route.path.clone(),
                        source,
                    })?;
                Ok(Rendered::matched(route, markup))
            }
        }
    }
}
