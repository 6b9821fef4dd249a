// View contract
// A view turns the shared props blob into an HTML fragment

use super::error::ViewError;

/// Props handed unmodified to whichever view matches.
pub type Props = serde_json::Value;

/// Renderable unit bound to a route.
pub trait View: Send + Sync {
    /// Render this view with the request's props.
    fn render(&self, props: &Props) -> Result<String, ViewError>;
}

impl<F> View for F
where
    F: Fn(&Props) -> Result<String, ViewError> + Send + Sync,
{
    fn render(&self, props: &Props) -> Result<String, ViewError> {
        self(props)
    }
}
