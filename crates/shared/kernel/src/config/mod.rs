mod error;

pub use error::{ConfigError, ConfigErrorExt};

use config::{Config, Environment, File, Map};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use sts_domain::config::RootConfiguration;
use tracing::{debug, info};

/// Prefix of environment variables that override configuration values.
pub const ENV_PREFIX: &str = "STS";
/// Separator between the prefix and nested keys (`STS__ADMIN_CONFIGURATION__THEME`).
pub const ENV_SEPARATOR: &str = "__";

/// A reusable configuration loader that combines file-based settings with environment overrides.
///
/// Sources are layered in this order, later ones winning:
/// 1. **Defaults**: whatever the target type's `serde` defaults produce.
/// 2. **Base File**: an optional file (e.g., `identity.toml`); the format is inferred from the
///    extension. A file that was asked for must exist.
/// 3. **Environment Overrides**: variables prefixed with `STS__`. Nested structures are
///    reached with double underscores (`STS__REGISTER_CONFIGURATION__ENABLED` maps to
///    `register_configuration.enabled`).
///
/// # Example
/// ```rust
/// use sts_kernel::config::ConfigLoader;
/// use sts_kernel::domain::config::{RootConfig, RootConfiguration};
///
/// let cfg: RootConfiguration = ConfigLoader::new()
///     .env_source([("STS__REGISTER_CONFIGURATION__ENABLED", "false")])
///     .load()
///     .unwrap();
///
/// assert!(!cfg.register_configuration().enabled);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    file: Option<PathBuf>,
    env_prefix: Cow<'static, str>,
    env_source: Option<Map<String, String>>,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self { file: None, env_prefix: Cow::Borrowed(ENV_PREFIX), env_source: None }
    }
}

impl ConfigLoader {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a required configuration file.
    #[must_use]
    pub fn file(mut self, path: impl AsRef<Path>) -> Self {
        self.file = Some(path.as_ref().to_path_buf());
        self
    }

    /// Overrides the environment variable prefix (`STS` by default).
    #[must_use]
    pub fn env_prefix(mut self, prefix: impl Into<Cow<'static, str>>) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Reads overrides from the given variables instead of the process environment.
    #[must_use]
    pub fn env_source<I, K, V>(mut self, vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.env_source = Some(vars.into_iter().map(|(k, v)| (k.into(), v.into())).collect());
        self
    }

    /// Builds the layered sources and deserializes them into `T`.
    ///
    /// # Errors
    /// Returns [`ConfigError::Config`] if the file is missing or unreadable, or if the merged
    /// values do not match the structure of `T`.
    pub fn load<T>(&self) -> Result<T, ConfigError>
    where
        T: DeserializeOwned,
    {
        let mut builder = Config::builder();

        if let Some(path) = &self.file {
            info!("Loading config from {}", path.display());
            builder = builder.add_source(File::from(path.as_path()).required(true));
        } else {
            debug!("No config file given, using defaults and environment");
        }

        builder = builder.add_source(
            Environment::with_prefix(&self.env_prefix)
                .separator(ENV_SEPARATOR)
                .source(self.env_source.clone()),
        );

        let config = builder
            .build()
            .context("Failed to build config")?
            .try_deserialize::<T>()
            .context("Failed to deserialize config")?;

        Ok(config)
    }
}

/// Loads `T` from an optional file plus the process environment.
///
/// # Errors
/// See [`ConfigLoader::load`].
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let loader = path.map_or_else(ConfigLoader::new, |p| ConfigLoader::new().file(p));
    loader.load()
}

/// Loads the identity server's [`RootConfiguration`].
///
/// Sections absent from every source keep their defaults. Errors keep the failing stage
/// (`Failed to build config` / `Failed to deserialize config`) as their context.
///
/// # Errors
/// See [`ConfigLoader::load`].
pub fn load_root_configuration(
    path: Option<impl AsRef<Path>>,
) -> Result<RootConfiguration, ConfigError> {
    load_config(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loader_defaults_to_sts_prefix() {
        let loader = ConfigLoader::new();
        assert_eq!(loader.env_prefix, "STS");
        assert!(loader.file.is_none());
        assert!(loader.env_source.is_none());
    }

    #[test]
    fn env_source_is_collected() {
        let loader = ConfigLoader::new().env_source([("STS__A", "1"), ("STS__B", "2")]);
        let vars = loader.env_source.expect("env source");
        assert_eq!(vars.len(), 2);
        assert_eq!(vars.get("STS__B").map(String::as_str), Some("2"));
    }
}
