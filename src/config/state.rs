// Application state module
// Shared, read-only state handed to every connection

use std::sync::atomic::AtomicUsize;
use std::sync::Arc;

use super::types::Config;
use crate::render::{RenderContext, Route};

/// Application state
pub struct AppState {
    pub config: Config,
    /// Route table and shared props, built once at startup
    pub context: Arc<RenderContext>,
    pub active_connections: Arc<AtomicUsize>,
}

impl AppState {
    /// Create `AppState` from the loaded config and the route table to serve
    pub fn new(config: Config, routes: Vec<Route>) -> Self {
        let context = RenderContext::new(routes, config.render.props.clone());
        Self {
            config,
            context: Arc::new(context),
            active_connections: Arc::new(AtomicUsize::new(0)),
        }
    }
}
