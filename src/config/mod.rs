//! Project configuration (`tint.toml`)
//!
//! Discovery walks up from the working directory with an XDG fallback;
//! CLI flags override file values override built-in defaults.

pub mod loader;
pub mod schema;

pub use loader::{
    find_config, load_config, load_or_default, resolve_analysis, CliOverrides, ConfigError,
};
pub use schema::{CacheConfig, DefaultsConfig, TintConfig};
