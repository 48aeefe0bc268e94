use std::{path::PathBuf, str::FromStr};

use serde::Deserialize;
use serde_with::serde_as;
use strum::{Display, EnumString};

#[derive(Deserialize, Clone, Debug)]
pub struct Settings {
    pub application: ApplicationSettings,
}

#[serde_as]
#[derive(Deserialize, Clone, Debug)]
pub struct ApplicationSettings {
    pub name: String,
    #[serde_as(as = "serde_with::DisplayFromStr")]
    pub port: u16,
    pub host: String,
    /// Mount point of the project routes, e.g. `/api/v1`.
    pub api_prefix: String,
    #[serde(default)]
    pub cors_allowed_origins: Vec<String>,
}

/// Layered configuration: `base.yaml`, then `<environment>.yaml`, then
/// `PROJECTS_*` environment variables (`__` separates nested keys).
///
/// The directory defaults to `./config` and can be moved with `APP_CONFIG_DIR`.
pub fn read_config() -> Result<Settings, config::ConfigError> {
    let config_directory = match std::env::var("APP_CONFIG_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => std::env::current_dir()
            .map_err(|e| config::ConfigError::Foreign(Box::new(e)))?
            .join("config"),
    };

    let environment = Environment::from_str(
        std::env::var("APP_ENVIRONMENT")
            .unwrap_or_else(|_| "local".into())
            .as_str(),
    )
    .map_err(|e| config::ConfigError::Message(format!("invalid APP_ENVIRONMENT: {e}")))?;
    let environment_filename = format!("{}.yaml", environment);

    let settings = config::Config::builder()
        .add_source(config::File::from(config_directory.join("base.yaml")))
        .add_source(config::File::from(config_directory.join(environment_filename)).required(false))
        .add_source(
            config::Environment::with_prefix("PROJECTS")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    settings.try_deserialize::<Settings>()
}

#[derive(Display, Debug, EnumString, PartialEq, Eq)]
pub enum Environment {
    #[strum(ascii_case_insensitive, serialize = "local")]
    Local,
    #[strum(ascii_case_insensitive, serialize = "production")]
    Production,
}
