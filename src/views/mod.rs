//! Built-in views
//!
//! Registered at startup as the default route table:
//! - `/` home page
//! - `/about` about page
//! - `/counter` counter view model rendered as JSON

use serde::Serialize;

use crate::render::markup::escape_html;
use crate::render::{Props, Route, ViewError};

const DEFAULT_TITLE: &str = "Nexus";

/// Default route table served by the binary
pub fn routes() -> Vec<Route> {
    vec![
        Route::new("/", home),
        Route::new("/about", about),
        Route::new("/counter", counter),
    ]
}

fn title(props: &Props) -> Result<String, ViewError> {
    match props.get("title") {
        None | Some(Props::Null) => Ok(DEFAULT_TITLE.to_string()),
        Some(Props::String(title)) => Ok(escape_html(title)),
        Some(_) => Err(ViewError::InvalidProp {
            name: "title".to_string(),
            expected: "string",
        }),
    }
}

pub fn home(props: &Props) -> Result<String, ViewError> {
    let title = title(props)?;
    Ok(format!(
        "<html><head><title>{title}</title></head><body><h1>{title}</h1>\
         <p>Rendered on the server.</p></body></html>"
    ))
}

pub fn about(props: &Props) -> Result<String, ViewError> {
    let title = title(props)?;
    Ok(format!(
        "<html><head><title>About | {title}</title></head><body><h1>About</h1>\
         <p>{title} renders its pages on the server.</p></body></html>"
    ))
}

#[derive(Debug, Serialize)]
struct CounterViewModel {
    counter: i32,
}

pub fn counter(props: &Props) -> Result<String, ViewError> {
    let counter = match props.get("counter") {
        None | Some(Props::Null) => 0,
        Some(value) => value
            .as_i64()
            .and_then(|n| i32::try_from(n).ok())
            .ok_or_else(|| ViewError::InvalidProp {
                name: "counter".to_string(),
                expected: "32-bit integer",
            })?,
    };
    let model = serde_json::to_string(&CounterViewModel { counter })
        .map_err(|e| ViewError::Failed(format!("failed to encode view model: {e}")))?;

    Ok(format!(
        "<html><head><title>Counter</title></head><body><h1>/counter</h1>\
         <pre>{}</pre></body></html>",
        escape_html(&model)
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_home_uses_title_prop() {
        let html = home(&json!({ "title": "X" })).unwrap();
        assert!(html.contains("<h1>X</h1>"));

        let html = home(&json!({})).unwrap();
        assert!(html.contains("<h1>Nexus</h1>"));
    }

    #[test]
    fn test_title_is_escaped() {
        let html = about(&json!({ "title": "<b>" })).unwrap();
        assert!(html.contains("&lt;b&gt;"));
        assert!(!html.contains("<b>"));
    }

    #[test]
    fn test_title_must_be_string() {
        let err = home(&json!({ "title": 3 })).unwrap_err();
        assert!(matches!(err, ViewError::InvalidProp { expected: "string", .. }));
    }

    #[test]
    fn test_counter_view_model() {
        let html = counter(&json!({ "counter": 42 })).unwrap();
        assert!(html.contains("<pre>{&quot;counter&quot;:42}</pre>"));

        let html = counter(&Props::Null).unwrap();
        assert!(html.contains("{&quot;counter&quot;:0}"));

        assert!(counter(&json!({ "counter": "many" })).is_err());
        assert!(counter(&json!({ "counter": 1_i64 << 40 })).is_err());
    }

    #[test]
    fn test_default_routes() {
        let paths: Vec<_> = routes().into_iter().map(|r| r.path).collect();
        assert_eq!(paths, ["/", "/about", "/counter"]);
    }
}
