// Configuration module entry point
// Loads layered configuration and holds the shared runtime state

mod state;
mod types;

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use hyper::StatusCode;

use crate::render::Props;

// Re-export public types
pub use state::AppState;
pub use types::{
    Config, HealthConfig, HttpConfig, LoggingConfig, PerformanceConfig, RenderConfig,
    ServerConfig,
};

/// Default config file name (without extension)
pub const DEFAULT_CONFIG_PATH: &str = "config";

impl Config {
    /// Load configuration from the path given as the first CLI argument,
    /// falling back to "config.toml" in the working directory
    pub fn load() -> Result<Self, config::ConfigError> {
        let path = std::env::args()
            .nth(1)
            .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());
        Self::load_from(&path)
    }

    /// Load configuration from specified file path (extension optional)
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        let mut cfg: Self = Self::builder()?
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(
                config::Environment::with_prefix("NEXUS")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        // The config tree lowercases keys; props must reach views verbatim
        if let Some(path) = locate_toml_file(config_path) {
            let text = std::fs::read_to_string(&path).map_err(|e| {
                config::ConfigError::Message(format!("Failed to read {}: {e}", path.display()))
            })?;
            if let Some(props) = render_props_from_toml(&text)? {
                cfg.render.props = props;
            }
        }

        cfg.validate()?;
        Ok(cfg)
    }

    /// Reject values the config tree accepts but the server cannot use
    pub fn validate(&self) -> Result<(), config::ConfigError> {
        let status = self.render.not_found_status;
        if StatusCode::from_u16(status).is_err() {
            return Err(config::ConfigError::Message(format!(
                "render.not_found_status {status} is not a valid HTTP status code"
            )));
        }
        Ok(())
    }

    /// Builder preloaded with every default value
    fn builder(
    ) -> Result<config::ConfigBuilder<config::builder::DefaultState>, config::ConfigError> {
        config::Config::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 8080)?
            .set_default("logging.level", "info")?
            .set_default("logging.access_log", true)?
            .set_default("performance.keep_alive_timeout", 75)?
            .set_default("performance.read_timeout", 30)?
            .set_default("performance.write_timeout", 30)?
            .set_default("http.server_name", "nexus-server")?
            .set_default("http.enable_cors", false)?
            .set_default("http.max_body_size", 10_485_760) // 10MB
    }

    pub fn get_socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }
}

/// Resolve a config path the way `config::File::with_name` does for TOML
fn locate_toml_file(config_path: &str) -> Option<PathBuf> {
    let path = Path::new(config_path);
    if path.is_file() {
        return (path.extension().and_then(|e| e.to_str()) == Some("toml"))
            .then(|| path.to_path_buf());
    }
    let with_ext = path.with_extension("toml");
    with_ext.is_file().then_some(with_ext)
}

/// Read the `[render.props]` table with its keys untouched
fn render_props_from_toml(text: &str) -> Result<Option<Props>, config::ConfigError> {
    let table: toml::Table = text
        .parse()
        .map_err(|e| config::ConfigError::Message(format!("Invalid TOML: {e}")))?;

    let Some(props) = table.get("render").and_then(|render| render.get("props")) else {
        return Ok(None);
    };
    serde_json::to_value(props)
        .map(Some)
        .map_err(|e| config::ConfigError::Message(format!("Invalid render.props: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn from_toml(toml: &str) -> Config {
        Config::builder()
            .unwrap()
            .add_source(config::File::from_str(toml, config::FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }

    #[test]
    fn test_defaults() {
        let cfg = from_toml("");
        assert_eq!(cfg.server.host, "127.0.0.1");
        assert_eq!(cfg.server.port, 8080);
        assert_eq!(cfg.server.workers, None);
        assert_eq!(cfg.logging.access_log_format, "combined");
        assert_eq!(cfg.http.max_body_size, 10_485_760);
        assert!(cfg.health.enabled);
        assert_eq!(cfg.health.liveness_path, "/healthz");
        assert_eq!(cfg.render.props, json!({}));
        assert_eq!(cfg.render.not_found_status, 200);
        assert_eq!(
            cfg.get_socket_addr().unwrap(),
            "127.0.0.1:8080".parse::<SocketAddr>().unwrap()
        );
    }

    #[test]
    fn test_file_overrides() {
        let cfg = from_toml(
            r#"
            [server]
            port = 3000
            workers = 2

            [render]
            not_found_status = 404

            [render.props]
            title = "X"
            counter = 7
            "#,
        );
        assert_eq!(cfg.server.port, 3000);
        assert_eq!(cfg.server.workers, Some(2));
        assert_eq!(cfg.render.not_found_status, 404);
        assert_eq!(cfg.render.props["title"], json!("X"));
        assert_eq!(cfg.render.props["counter"], json!(7));
    }

    #[test]
    fn test_render_props_keep_key_case() {
        let props = render_props_from_toml(
            "[render.props]\npageTitle = \"X\"\nitems = [1, 2]\n[render.props.navBar]\nshowLogo = true\n",
        )
        .unwrap()
        .unwrap();
        assert_eq!(
            props,
            json!({ "pageTitle": "X", "items": [1, 2], "navBar": { "showLogo": true } })
        );

        assert!(render_props_from_toml("[server]\nport = 1").unwrap().is_none());
    }

    #[test]
    fn test_load_from_file_keeps_props_and_validates_status() {
        let dir = std::env::temp_dir().join(format!("nexus-config-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();

        let good = dir.join("good.toml");
        std::fs::write(&good, "[render.props]\npageTitle = \"X\"\n").unwrap();
        let bad = dir.join("bad.toml");
        std::fs::write(&bad, "[render]\nnot_found_status = 42\n").unwrap();

        // extension is optional, as with config::File::with_name
        let cfg = Config::load_from(dir.join("good").to_str().unwrap()).unwrap();
        let bad_result = Config::load_from(bad.to_str().unwrap());
        let _ = std::fs::remove_dir_all(&dir);

        assert_eq!(cfg.render.props["pageTitle"], json!("X"));
        assert!(cfg.render.props.get("pagetitle").is_none());
        assert!(bad_result.is_err());
    }

    #[test]
    fn test_validate_not_found_status() {
        let mut cfg = from_toml("");
        assert!(cfg.validate().is_ok());
        cfg.render.not_found_status = 404;
        assert!(cfg.validate().is_ok());
        cfg.render.not_found_status = 42;
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn test_invalid_address() {
        let mut cfg = from_toml("");
        cfg.server.host = "not an ip".to_string();
        assert!(cfg.get_socket_addr().is_err());
    }
}
