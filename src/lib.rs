//! Chart store for the grapher admin
//!
//! Resolves chart configurations for rendering, derives cache tags for
//! chart data and follows slug redirects, on top of a SQLite entity store.

pub mod build_id;
pub mod charts;
pub mod config;
pub mod error;
pub mod models;
pub mod store;

pub use error::{Error, Result};
