//! Configuration loader with layered sources.

use crate::{AppConfig, ConfigValidator};
use config::{Config, ConfigError, Environment, File, Map};
use pagesample_core::{PageSampleError, PageSampleResult};
use parking_lot::RwLock;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Environment variable selecting the environment-specific config file.
pub const ENVIRONMENT_VAR: &str = "PAGESAMPLE_ENVIRONMENT";

/// Prefix of environment variable overrides, e.g. `PAGESAMPLE__SAMPLE__PAGE_INDEX`.
pub const ENV_PREFIX: &str = "PAGESAMPLE";

/// Environment used when `PAGESAMPLE_ENVIRONMENT` is unset.
pub const DEFAULT_ENVIRONMENT: &str = "development";

/// Where environment variables are read from.
#[derive(Debug, Clone)]
enum EnvVars {
    /// The process environment, after loading `.env`.
    Process,
    /// A fixed set of variables; the process environment is ignored.
    Fixed(Map<String, String>),
}

impl EnvVars {
    fn get(&self, key: &str) -> Option<String> {
        match self {
            Self::Process => std::env::var(key).ok(),
            Self::Fixed(vars) => vars.get(key).cloned(),
        }
    }
}

/// Configuration loader with runtime reload support.
#[derive(Clone)]
pub struct ConfigLoader {
    config: Arc<RwLock<AppConfig>>,
    config_dir: PathBuf,
    env_vars: EnvVars,
}

impl ConfigLoader {
    /// Creates a new configuration loader.
    ///
    /// Configuration is loaded from multiple sources in order:
    /// 1. `{config_dir}/default.toml` - Default values
    /// 2. `{config_dir}/{environment}.toml` - Environment-specific overrides
    /// 3. `{config_dir}/local.toml` - Local overrides
    /// 4. Environment variables with `PAGESAMPLE__` prefix
    pub fn new(config_dir: impl Into<PathBuf>) -> PageSampleResult<Self> {
        Self::with_sources(config_dir.into(), EnvVars::Process)
    }

    /// Creates a loader that reads environment variables from `vars` only.
    ///
    /// Neither `.env` nor the process environment is consulted, on load or
    /// on reload.
    pub fn with_env_vars<I, K, V>(config_dir: impl Into<PathBuf>, vars: I) -> PageSampleResult<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let vars = vars.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        Self::with_sources(config_dir.into(), EnvVars::Fixed(vars))
    }

    /// Loads configuration from the default location (`./config`).
    pub fn from_default_location() -> PageSampleResult<Self> {
        Self::new("./config")
    }

    fn with_sources(config_dir: PathBuf, env_vars: EnvVars) -> PageSampleResult<Self> {
        let config = Self::load_config(&config_dir, &env_vars)?;

        Ok(Self {
            config: Arc::new(RwLock::new(config)),
            config_dir,
            env_vars,
        })
    }

    /// Returns a snapshot of the current configuration.
    #[must_use]
    pub fn get(&self) -> AppConfig {
        self.config.read().clone()
    }

    /// Returns the directory configuration files are read from.
    #[must_use]
    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    /// Reloads the configuration from disk.
    ///
    /// The current configuration is kept if the new one fails to load.
    pub fn reload(&self) -> PageSampleResult<()> {
        let new_config = Self::load_config(&self.config_dir, &self.env_vars)?;
        *self.config.write() = new_config;
        info!("Configuration reloaded successfully");
        Ok(())
    }

    /// Gets a specific configuration value by dotted key path.
    pub fn get_value<T: serde::de::DeserializeOwned>(&self, key: &str) -> Option<T> {
        let json = serde_json::to_value(&*self.config.read()).ok()?;

        let mut current = &json;
        for part in key.split('.') {
            current = current.get(part)?;
        }

        serde_json::from_value(current.clone()).ok()
    }

    fn load_config(config_dir: &Path, env_vars: &EnvVars) -> PageSampleResult<AppConfig> {
        if let EnvVars::Process = env_vars {
            if let Err(e) = dotenvy::dotenv() {
                debug!("No .env file found or error loading it: {}", e);
            }
        }

        let environment = env_vars
            .get(ENVIRONMENT_VAR)
            .unwrap_or_else(|| DEFAULT_ENVIRONMENT.to_string());
        check_environment_name(&environment)?;
        info!("Loading configuration for environment: {}", environment);

        let mut builder = Config::builder();

        for name in ["default", environment.as_str(), "local"] {
            let path = config_dir.join(format!("{name}.toml"));
            if path.exists() {
                debug!("Loading config from: {}", path.display());
                builder = builder.add_source(File::from(path).required(false));
            }
        }

        let mut overrides = Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("__")
            .separator("__")
            .try_parsing(true);
        if let EnvVars::Fixed(vars) = env_vars {
            overrides = overrides.source(Some(vars.clone()));
        }
        builder = builder.add_source(overrides);

        let app_config: AppConfig = builder
            .build()
            .and_then(|config| config.try_deserialize())
            .map_err(config_error_to_page_sample_error)?;

        if app_config.app.environment == "production" && app_config.logging.level.eq_ignore_ascii_case("trace") {
            warn!("Trace logging enabled in production");
        }

        ConfigValidator::validate(&app_config).map_err(|errors| {
            let message = errors
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("; ");
            PageSampleError::Configuration(message)
        })?;

        Ok(app_config)
    }
}

/// Environment names become file names, so only `[A-Za-z0-9_-]` is allowed.
fn check_environment_name(name: &str) -> PageSampleResult<()> {
    let valid = !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');

    if valid {
        Ok(())
    } else {
        Err(PageSampleError::configuration(format!(
            "Invalid {ENVIRONMENT_VAR} value {name:?}: only letters, digits, '-' and '_' are allowed"
        )))
    }
}

fn config_error_to_page_sample_error(err: ConfigError) -> PageSampleError {
    PageSampleError::Configuration(err.to_string())
}
