//! Logger module
//!
//! Provides logging utilities for the SSR server including:
//! - Server lifecycle logging
//! - Access logging with multiple formats
//! - Render outcome and error logging
//! - File-based logging support

mod format;
pub mod writer;

pub use format::AccessLogEntry;

use std::fmt;
use std::net::SocketAddr;
use std::str::FromStr;

use chrono::Local;

use crate::config::{Config, LoggingConfig};
use crate::render::{Outcome, RenderError};

/// Log severity, most severe first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    Error,
    Warn,
    Info,
    Debug,
}

impl Level {
    /// Whether a writer configured at `self` emits `level`
    pub fn allows(self, level: Self) -> bool {
        level <= self
    }
}

impl FromStr for Level {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "error" => Ok(Self::Error),
            "warn" | "warning" => Ok(Self::Warn),
            "info" => Ok(Self::Info),
            "debug" | "trace" => Ok(Self::Debug),
            other => Err(format!("unknown log level '{other}'")),
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => write!(f, "ERROR"),
            Self::Warn => write!(f, "WARN"),
            Self::Info => write!(f, "INFO"),
            Self::Debug => write!(f, "DEBUG"),
        }
    }
}

/// Initialize the logger with configuration
///
/// Should be called once at application startup.
pub fn init(config: &LoggingConfig) -> std::io::Result<()> {
    let level = config
        .level
        .parse()
        .map_err(|e: String| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;
    writer::init(
        level,
        config.access_log_file.as_deref(),
        config.error_log_file.as_deref(),
    )
}

fn write(level: Level, message: &str) {
    let line = format!(
        "[{}] [{level}] {message}",
        Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    match writer::get() {
        Some(w) => w.write(level, &line),
        None if level <= Level::Warn => eprintln!("{line}"),
        None if level <= Level::Info => println!("{line}"),
        None => {}
    }
}

pub fn log_server_start(addr: &SocketAddr, config: &Config, route_count: usize) {
    write(Level::Info, "======================================");
    write(Level::Info, "SSR server started successfully");
    write(Level::Info, &format!("Listening on: http://{addr}"));
    write(Level::Info, &format!("Log level: {}", config.logging.level));
    write(Level::Info, &format!("Routes registered: {route_count}"));
    if let Some(workers) = config.server.workers {
        write(Level::Info, &format!("Worker threads: {workers}"));
    }
    if let Some(ref path) = config.logging.access_log_file {
        write(Level::Info, &format!("Access log: {path}"));
    }
    if let Some(ref path) = config.logging.error_log_file {
        write(Level::Info, &format!("Error log: {path}"));
    }
    write(Level::Info, "======================================");
}

pub fn log_connection_accepted(peer_addr: &SocketAddr) {
    write(Level::Debug, &format!("[Connection] Accepted from: {peer_addr}"));
}

pub fn log_connection_error(err: &impl fmt::Debug) {
    write(Level::Error, &format!("Failed to serve connection: {err:?}"));
}

pub fn log_render(url: &str, outcome: &Outcome, bytes: usize) {
    let outcome = match outcome {
        Outcome::Matched { path } => format!("matched {path}"),
        Outcome::Fallback(fallback) => format!("fallback {fallback:?}"),
    };
    write(
        Level::Debug,
        &format!("[Render] {url} -> {outcome} ({bytes} bytes)"),
    );
}

pub fn log_render_error(url: &str, err: &RenderError) {
    write(Level::Error, &format!("[Render] {url} failed: {err}"));
}

pub fn log_error(message: &str) {
    write(Level::Error, message);
}

pub fn log_warning(message: &str) {
    write(Level::Warn, message);
}

pub fn log_info(message: &str) {
    write(Level::Info, message);
}

/// Log formatted access log entry
pub fn log_access(entry: &AccessLogEntry, format: &str) {
    let line = entry.format(format);
    match writer::get() {
        Some(w) => w.write_access(&line),
        None => println!("{line}"),
    }
}
