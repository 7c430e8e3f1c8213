//! Chart configuration resolution, cache tags and slug redirects

pub mod cache_tag;
pub mod config;
pub mod redirects;
pub mod resolver;

pub use cache_tag::{CacheTag, CacheTagDeriver};
pub use config::{ChartConfig, Dimension};
pub use redirects::find_with_redirects;
pub use resolver::{ConfigPayload, resolve_config};
