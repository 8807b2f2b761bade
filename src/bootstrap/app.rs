//! Setup for the main application.
//!
//! The [`setup`] only builds the application configuration and initializes
//! the static variables and the logging. The periodic display jobs are
//! started later with the [`app::start`](crate::app::start) function.
use std::env;
use std::sync::Arc;

use decimal_clock_configuration::{Configuration, ENV_VAR_CONFIG_TOML, ENV_VAR_CONFIG_TOML_PATH};

use decimal_clock_clock::static_time;

use crate::bootstrap;

/// It loads the application configuration and initializes the static
/// variables and the logging.
///
/// # Panics
///
/// Will panic if the configuration cannot be loaded.
#[must_use]
pub fn setup() -> Arc<Configuration> {
    let configuration = Arc::new(initialize_configuration());

    initialize_static();
    initialize_logging(&configuration);

    configuration
}

/// It initializes the application static values.
///
/// These values are accessed throughout the app and must be initialized at
/// the very beginning so that both time anchors refer to the same instant.
pub fn initialize_static() {
    // Set the time of the app starting
    lazy_static::initialize(&static_time::TIME_AT_APP_START);

    // Set the matching monotonic anchor for uptime measurements
    lazy_static::initialize(&static_time::INSTANT_AT_APP_START);
}

/// It loads the application configuration from the environment or a file.
///
/// # Panics
///
/// Will panic if it can't load the configuration from either
/// `./decimal-clock.toml` file or the env var `DECIMAL_CLOCK_CONFIG_TOML`.
#[must_use]
fn initialize_configuration() -> Configuration {
    const DEFAULT_CONFIG_PATH: &str = "./decimal-clock.toml";

    if env::var(ENV_VAR_CONFIG_TOML).is_ok() {
        println!("Loading configuration from env var {ENV_VAR_CONFIG_TOML}");
        Configuration::load_from_env_var(ENV_VAR_CONFIG_TOML).unwrap()
    } else {
        let config_path = env::var(ENV_VAR_CONFIG_TOML_PATH).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_owned());
        println!("Loading configuration from config file {config_path}");
        Configuration::load_from_file(&config_path).unwrap()
    }
}

pub fn initialize_logging(config: &Arc<Configuration>) {
    bootstrap::logging::setup(config);
}
