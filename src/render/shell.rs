//! App shell
//!
//! Entry point of the render pipeline. Resolves the route once, answers
//! unknown URLs with the shell fallback, and otherwise hands the resolved
//! route to the router inside a freshly built scope.

use super::error::RenderError;
use super::route::{resolve_route, RenderContext, Resolution, Route};
use super::router::Router;
use super::scope::RenderScope;

/// Fixed markup emitted when no route matches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fallback {
    /// Emitted by the shell before any scope is built
    ShellNotFound,
    /// Emitted by the router when it is handed an unresolved URL
    RouterNotFound,
}

impl Fallback {
    pub const fn markup(self) -> &'static str {
        match self {
            Self::ShellNotFound => "<h1>404</h1>",
            Self::RouterNotFound => "<h1>Not found :c</h1>",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Matched { path: String },
    Fallback(Fallback),
}

/// Markup produced by one render call and how it was produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub markup: String,
    pub outcome: Outcome,
}

impl Rendered {
    pub fn matched(route: &Route, markup: String) -> Self {
        Self {
            markup,
            outcome: Outcome::Matched {
                path: route.path.clone(),
            },
        }
    }

    pub fn fallback(fallback: Fallback) -> Self {
        Self {
            markup: fallback.markup().to_string(),
            outcome: Outcome::Fallback(fallback),
        }
    }

    pub const fn is_fallback(&self) -> bool {
        matches!(self.outcome, Outcome::Fallback(_))
    }
}

/// Render `url` against `context` into an HTML fragment
pub fn render(context: &RenderContext, url: &str) -> Result<Rendered, RenderError> {
    let resolution = resolve_route(&context.routes, url);
    if let Resolution::NotFound = resolution {
        return Ok(Rendered::fallback(Fallback::ShellNotFound));
    }

    let scope = RenderScope::bound(context, url);
    Router::dispatch(&scope, resolution)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{Props, View, ViewError};
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    /// View that records every props value it is rendered with
    struct Recorder {
        name: &'static str,
        calls: Arc<AtomicUsize>,
        seen: Arc<Mutex<Vec<Props>>>,
    }

    impl View for Recorder {
        fn render(&self, props: &Props) -> Result<String, ViewError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.seen.lock().unwrap().push(props.clone());
            Ok(format!("<main>{}</main>", self.name))
        }
    }

    struct Fixture {
        context: RenderContext,
        calls: Arc<AtomicUsize>,
        seen: Arc<Mutex<Vec<Props>>>,
    }

    fn fixture() -> Fixture {
        let calls = Arc::new(AtomicUsize::new(0));
        let seen = Arc::new(Mutex::new(Vec::new()));
        let view = |name| Recorder {
            name,
            calls: Arc::clone(&calls),
            seen: Arc::clone(&seen),
        };
        let context = RenderContext::new(
            vec![Route::new("/", view("home")), Route::new("/about", view("about"))],
            json!({ "title": "X" }),
        );
        Fixture {
            context,
            calls,
            seen,
        }
    }

    #[test]
    fn test_render_matched_route_receives_props() {
        let fx = fixture();
        let rendered = render(&fx.context, "/about").unwrap();

        assert_eq!(rendered.markup, "<main>about</main>");
        assert_eq!(
            rendered.outcome,
            Outcome::Matched {
                path: "/about".to_string()
            }
        );
        assert_eq!(fx.calls.load(Ordering::SeqCst), 1);
        assert_eq!(*fx.seen.lock().unwrap(), vec![json!({ "title": "X" })]);
    }

    #[test]
    fn test_render_missing_route_uses_shell_fallback() {
        let fx = fixture();
        let rendered = render(&fx.context, "/missing").unwrap();

        assert_eq!(rendered.markup, "<h1>404</h1>");
        assert_eq!(rendered.outcome, Outcome::Fallback(Fallback::ShellNotFound));
        assert!(rendered.is_fallback());
        assert_eq!(fx.calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_render_is_case_sensitive() {
        let fx = fixture();
        assert!(render(&fx.context, "/About").unwrap().is_fallback());
        assert!(render(&fx.context, "/about/").unwrap().is_fallback());
        assert_eq!(fx.calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_render_propagates_view_failure() {
        let failing = |_: &Props| -> Result<String, ViewError> {
            Err(ViewError::Failed("boom".to_string()))
        };
        let context = RenderContext::new(vec![Route::new("/", failing)], Props::Null);

        let err = render(&context, "/").unwrap_err();
        match err {
            RenderError::View { path, source } => {
                assert_eq!(path, "/");
                assert_eq!(source.to_string(), "boom");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_fallback_markups_are_distinct() {
        assert_ne!(
            Fallback::ShellNotFound.markup(),
            Fallback::RouterNotFound.markup()
        );
    }
}
