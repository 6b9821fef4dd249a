// Render scope
// Request-local bindings for the render context and URL, built once per
// render call and passed explicitly to the router.

use super::error::RenderError;
use super::route::RenderContext;

/// Read-only bindings established for one render call.
#[derive(Debug, Default, Clone, Copy)]
pub struct RenderScope<'a> {
    context: Option<&'a RenderContext>,
    url: Option<&'a str>,
}

impl<'a> RenderScope<'a> {
    /// Empty scope with no bindings
    pub const fn new() -> Self {
        Self {
            context: None,
            url: None,
        }
    }

    /// Scope with both bindings established
    pub fn bound(context: &'a RenderContext, url: &'a str) -> Self {
        Self::new().with_context(context).with_url(url)
    }

    #[must_use]
    pub fn with_context(mut self, context: &'a RenderContext) -> Self {
        self.context = Some(context);
        self
    }

    #[must_use]
    pub fn with_url(mut self, url: &'a str) -> Self {
        self.url = Some(url);
        self
    }

    pub fn context(&self) -> Result<&'a RenderContext, RenderError> {
        self.context.ok_or(RenderError::MissingScope("context"))
    }

    pub fn url(&self) -> Result<&'a str, RenderError> {
        self.url.ok_or(RenderError::MissingScope("url"))
    }
}
