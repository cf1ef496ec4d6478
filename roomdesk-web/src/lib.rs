//! # Roomdesk Web Server Library
//!
//! Server-rendered web application for managing room records behind a
//! session-gated login flow.
//!
//! ## Modules
//!
//! - `app`: Application state and router builder
//! - `config`: Configuration management
//! - `error`: Error handling and HTTP response mapping
//! - `session`: Session cookie extractors
//! - `routes`: Route handlers and their templates

pub mod app;
pub mod config;
pub mod error;
pub mod routes;
pub mod session;
