//! Configuration file discovery and loading.
//!
//! Precedence, lowest to highest:
//! 1. Built-in defaults
//! 2. The config file (`<config_dir>/gitignore-cli/config.yml`, or `--config`)
//! 3. `GITIGNORE_CLI_*` environment variables
//! 4. Command-line flags (applied by the CLI)

use std::fs;
use std::path::{Path, PathBuf};

use super::schema::Config;
use crate::error::{GitignoreError, Result};

/// Directory name under the platform config directory.
pub const APP_DIR_NAME: &str = "gitignore-cli";

/// Config file name.
pub const CONFIG_FILE_NAME: &str = "config.yml";

/// Overrides `store_dir`.
pub const ENV_STORE: &str = "GITIGNORE_CLI_STORE";

/// Overrides `api_url`.
pub const ENV_API_URL: &str = "GITIGNORE_CLI_API_URL";

/// Overrides `raw_url`.
pub const ENV_RAW_URL: &str = "GITIGNORE_CLI_RAW_URL";

/// Default config file location, if the platform has a config directory.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join(APP_DIR_NAME).join(CONFIG_FILE_NAME))
}

/// Load a single config file.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            GitignoreError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            GitignoreError::Io(e)
        }
    })?;

    parse_config(&content, path)
}

/// Parse YAML content into a [`Config`]. Blank content yields the defaults.
pub fn parse_config(content: &str, source_path: &Path) -> Result<Config> {
    if content.trim().is_empty() {
        return Ok(Config::default());
    }

    serde_yaml::from_str(content).map_err(|e| GitignoreError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Apply `GITIGNORE_CLI_*` overrides using `lookup` to read variables.
pub fn apply_env_overrides<F>(config: &mut Config, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

    if let Some(store) = non_empty(ENV_STORE) {
        config.store_dir = Some(PathBuf::from(store));
    }
    if let Some(api_url) = non_empty(ENV_API_URL) {
        config.api_url = api_url;
    }
    if let Some(raw_url) = non_empty(ENV_RAW_URL) {
        config.raw_url = raw_url;
    }
}

/// Load configuration with an optional explicit file.
///
/// An explicit file must exist; the default location is optional.
pub fn load_config(config_override: Option<&Path>) -> Result<Config> {
    let mut config = match config_override {
        Some(path) => load_config_file(path)?,
        None => match default_config_path().filter(|p| p.is_file()) {
            Some(path) => {
                tracing::debug!("Loading config from {}", path.display());
                load_config_file(&path)?
            }
            None => Config::default(),
        },
    };

    apply_env_overrides(&mut config, |key| std::env::var(key).ok());
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::TempDir;

    #[test]
    fn load_existing_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.yml");
        fs::write(&path, "store_dir: /tmp/templates\nmirror_when_empty: true\n").unwrap();

        let config = load_config_file(&path).unwrap();

        assert_eq!(config.store_dir, Some(PathBuf::from("/tmp/templates")));
        assert!(config.mirror_when_empty);
    }

    #[test]
    fn missing_file_is_config_not_found() {
        let temp = TempDir::new().unwrap();
        let err = load_config_file(&temp.path().join("missing.yml")).unwrap_err();
        assert!(matches!(err, GitignoreError::ConfigNotFound { .. }));
    }

    #[test]
    fn invalid_yaml_is_parse_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.yml");
        fs::write(&path, "timeout_secs: [not, a, number]").unwrap();

        let err = load_config_file(&path).unwrap_err();

        assert!(matches!(err, GitignoreError::ConfigParseError { .. }));
        assert!(err.to_string().contains("config.yml"));
    }

    #[test]
    fn blank_file_is_default() {
        let config = parse_config("\n  \n", Path::new("config.yml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn env_overrides_replace_values() {
        let vars: HashMap<&str, &str> = [
            (ENV_STORE, "/env/store"),
            (ENV_API_URL, "http://localhost:1/contents"),
        ]
        .into_iter()
        .collect();
        let mut config = Config::default();

        apply_env_overrides(&mut config, |k| vars.get(k).map(|v| v.to_string()));

        assert_eq!(config.store_dir, Some(PathBuf::from("/env/store")));
        assert_eq!(config.api_url, "http://localhost:1/contents");
        assert_eq!(config.raw_url, Config::default().raw_url);
    }

    #[test]
    fn empty_env_values_are_ignored() {
        let mut config = Config::default();
        apply_env_overrides(&mut config, |_| Some("  ".to_string()));
        assert_eq!(config, Config::default());
    }

    #[test]
    fn explicit_file_must_exist() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("nope.yml");
        assert!(load_config(Some(missing.as_path())).is_err());
    }
}
