//! Table-level queries over the SQLite pool

pub mod charts;
pub mod datasets;
pub mod entities;
pub mod logos;
pub mod redirects;
pub mod variables;
