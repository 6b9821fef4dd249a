//! Server-side rendering shim
//!
//! Resolves a request URL against a route table, renders the matched view
//! with the shared props and returns the markup as an HTML document.

pub mod config;
pub mod handler;
pub mod http;
pub mod logger;
pub mod render;
pub mod server;
pub mod views;
