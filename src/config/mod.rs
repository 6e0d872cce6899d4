//! Configuration loading.
//!
//! - Schema and defaults in [`schema`]
//! - File discovery, parsing and environment overrides in [`loader`]
//!
//! # Example
//!
//! ```
//! use gitignore_cli::config::{parse_config, Config};
//! use std::path::Path;
//!
//! let config = parse_config("download_delay_ms: 0", Path::new("config.yml")).unwrap();
//! assert_eq!(config.download_delay_ms, 0);
//! assert_eq!(config.suffix, Config::default().suffix);
//! ```

pub mod loader;
pub mod schema;

pub use loader::{
    apply_env_overrides, default_config_path, load_config, load_config_file, parse_config,
    ENV_API_URL, ENV_RAW_URL, ENV_STORE,
};
pub use schema::Config;
