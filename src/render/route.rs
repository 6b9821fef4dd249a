//! Route table and resolution
//!
//! Routes are matched by exact, case-sensitive path equality. No
//! normalization is applied and the first matching entry wins.

use std::fmt;
use std::sync::Arc;

use super::view::{Props, View};

/// A path bound to the view rendered for it.
#[derive(Clone)]
pub struct Route {
    pub path: String,
    pub view: Arc<dyn View>,
}

impl Route {
    pub fn new(path: impl Into<String>, view: impl View + 'static) -> Self {
        Self {
            path: path.into(),
            view: Arc::new(view),
        }
    }
}

impl fmt::Debug for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Route").field("path", &self.path).finish_non_exhaustive()
    }
}

/// Per-request bundle of available routes and shared props.
#[derive(Debug, Clone)]
pub struct RenderContext {
    pub routes: Vec<Route>,
    pub props: Props,
}

impl RenderContext {
    pub const fn new(routes: Vec<Route>, props: Props) -> Self {
        Self { routes, props }
    }
}

/// Outcome of a route lookup
#[derive(Debug, Clone, Copy)]
pub enum Resolution<'a> {
    Matched(&'a Route),
    NotFound,
}

impl Resolution<'_> {
    pub const fn is_matched(&self) -> bool {
        matches!(self, Self::Matched(_))
    }
}

/// Find the first route whose path equals `url`
pub fn resolve_route<'a>(routes: &'a [Route], url: &str) -> Resolution<'a> {
    routes
        .iter()
        .find(|route| route.path == url)
        .map_or(Resolution::NotFound, Resolution::Matched)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::ViewError;

    fn fixed(markup: &'static str) -> impl View {
        move |_: &Props| -> Result<String, ViewError> { Ok(markup.to_string()) }
    }

    fn render_matched(resolution: Resolution<'_>) -> String {
        match resolution {
            Resolution::Matched(route) => route.view.render(&Props::Null).unwrap(),
            Resolution::NotFound => panic!("expected a match"),
        }
    }

    #[test]
    fn test_resolve_exact_match() {
        let routes = vec![Route::new("/", fixed("home")), Route::new("/about", fixed("about"))];

        assert_eq!(render_matched(resolve_route(&routes, "/")), "home");
        assert_eq!(render_matched(resolve_route(&routes, "/about")), "about");
    }

    #[test]
    fn test_resolve_is_case_sensitive_and_unnormalized() {
        let routes = vec![Route::new("/a", fixed("a"))];

        assert!(resolve_route(&routes, "/a").is_matched());
        assert!(!resolve_route(&routes, "/A").is_matched());
        assert!(!resolve_route(&routes, "/a/").is_matched());
        assert!(!resolve_route(&routes, "/a?x=1").is_matched());
        assert!(!resolve_route(&routes, "a").is_matched());
    }

    #[test]
    fn test_resolve_first_duplicate_wins() {
        let routes = vec![
            Route::new("/dup", fixed("first")),
            Route::new("/dup", fixed("second")),
        ];

        for _ in 0..3 {
            assert_eq!(render_matched(resolve_route(&routes, "/dup")), "first");
        }
    }

    #[test]
    fn test_resolve_empty_table() {
        assert!(!resolve_route(&[], "/").is_matched());
    }
}
