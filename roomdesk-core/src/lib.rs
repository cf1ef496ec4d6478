//! # Roomdesk Core Library
//!
//! Shared types and business logic for the roomdesk room-registry web
//! application: database models, the SQLite pool/migration layer, and the
//! authentication primitives (password hashing, session tokens).
//!
//! ## Module Organization
//!
//! - `models`: Database models and their CRUD operations
//! - `auth`: Password hashing and session token utilities
//! - `db`: Connection pool and migration runner

pub mod auth;
pub mod db;
pub mod models;

/// Current version of the roomdesk core library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
