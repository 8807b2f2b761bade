//! Configuration data structures for the [Decimal Clock](https://docs.rs/decimal-clock).
//!
//! The configuration is loaded from a [TOML](https://toml.io/en/) file
//! `decimal-clock.toml` in the project root folder or from an environment
//! variable with the same content as the file.
//!
//! Values loaded from the file can be overridden field by field with
//! environment variables prefixed with `DECIMAL_CLOCK_` and nested with `__`
//! (for example `DECIMAL_CLOCK_CORE__PRECISION=6`).
//!
//! When you run the application without providing the configuration via a
//! file or env var, the default configuration is used.
//!
//! # Sections
//!
//! Each section in the toml structure is mapped to a data structure:
//!
//! - `[core]`: display precision, tick intervals and the selection store.
//!   Mapped to [`Core`].
//! - `[logging]`: the log threshold. Mapped to [`Logging`].
//!
//! # Default configuration
//!
//! ```toml
//! [core]
//! precision = 5
//! clock_tick_interval_ms = 1000
//! stopwatch_tick_interval_ms = 10
//!
//! [core.selection]
//! driver = "json_file"
//! path = "./storage/selection.json"
//!
//! [logging]
//! threshold = "info"
//! ```
pub mod core;
pub mod logging;

use figment::providers::{Env, Format, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use crate::core::{Core, Selection, SelectionDriver};
pub use crate::logging::{Logging, Threshold};

/// Prefix for the environment variables that override single config fields.
pub const CONFIG_OVERRIDE_PREFIX: &str = "DECIMAL_CLOCK_";

/// The whole `decimal-clock.toml` file content. It has priority over the
/// config file. Even if the file is not on the default path.
pub const ENV_VAR_CONFIG_TOML: &str = "DECIMAL_CLOCK_CONFIG_TOML";

/// The `decimal-clock.toml` file location.
pub const ENV_VAR_CONFIG_TOML_PATH: &str = "DECIMAL_CLOCK_CONFIG_TOML_PATH";

/// The whole application configuration.
#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone, Default)]
pub struct Configuration {
    /// Core display and persistence configuration.
    #[serde(default)]
    pub core: Core,

    /// Logging configuration.
    #[serde(default)]
    pub logging: Logging,
}

impl Configuration {
    /// Loads the configuration from a TOML file, with `DECIMAL_CLOCK_`
    /// prefixed env vars taking precedence over the file values.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the file cannot be read or contains an invalid
    /// configuration.
    pub fn load_from_file(path: &str) -> Result<Configuration, Error> {
        let figment = Figment::new()
            .merge(Toml::file(path))
            .merge(Env::prefixed(CONFIG_OVERRIDE_PREFIX).split("__"));

        let config: Configuration = figment.extract()?;

        Ok(config)
    }

    /// Loads the whole configuration in TOML format from an environment
    /// variable.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the environment variable does not exist or holds
    /// an invalid configuration.
    pub fn load_from_env_var(env_var_name: &str) -> Result<Configuration, Error> {
        let config_toml = std::env::var(env_var_name).map_err(|_| Error::UnableToLoadFromEnvironmentVariable {
            env_var_name: env_var_name.to_owned(),
        })?;

        let figment = Figment::new()
            .merge(Toml::string(&config_toml))
            .merge(Env::prefixed(CONFIG_OVERRIDE_PREFIX).split("__"));

        let config: Configuration = figment.extract()?;

        Ok(config)
    }

    /// Saves the configuration in TOML format at the given path.
    ///
    /// # Errors
    ///
    /// Will return `Err` if `path` is not a valid path or the configuration
    /// file cannot be written.
    pub fn save_to_file(&self, path: &str) -> Result<(), Error> {
        let toml = toml::to_string(self).expect("configuration serialization into TOML cannot fail");

        std::fs::write(path, toml).map_err(|err| Error::UnableToWriteConfigFile {
            path: path.to_owned(),
            source: err,
        })?;

        Ok(())
    }
}

/// Errors that can occur when loading or saving the configuration.
#[derive(Error, Debug)]
pub enum Error {
    /// The environment variable with the whole configuration is not set.
    #[error("Unable to load configuration from environment variable: {env_var_name} is not set")]
    UnableToLoadFromEnvironmentVariable { env_var_name: String },

    #[error("Failed processing the configuration: {source}")]
    ConfigError {
        #[from]
        source: figment::Error,
    },

    #[error("Unable to write configuration to {path}: {source}")]
    UnableToWriteConfigFile { path: String, source: std::io::Error },
}
