//! Configuration loading utilities

use config::{Config, ConfigError, Environment, File};
use thiserror::Error;
use tracing::debug;

use crate::settings::{ConfigValidationError, Settings};

/// Prefix for environment overrides, e.g. `UR__SERVER__PORT=8080`
pub const ENV_PREFIX: &str = "UR";

/// Errors raised while loading settings
#[derive(Error, Debug)]
pub enum ConfigLoadError {
	#[error("Failed to read configuration: {0}")]
	Source(#[from] ConfigError),

	#[error("Invalid configuration: {0}")]
	Validation(#[from] ConfigValidationError),
}

/// Load configuration from the default file and environment
///
/// `config/config.{toml,...}` is optional; anything it leaves out falls back to
/// [`Settings::default`]. Environment variables take precedence over the file.
pub fn load_config() -> Result<Settings, ConfigLoadError> {
	load_config_from("config/config")
}

/// Load configuration from an explicit file stem
pub fn load_config_from(path: &str) -> Result<Settings, ConfigLoadError> {
	debug!("Loading configuration from {}", path);

	let s = Config::builder()
		.add_source(File::with_name(path).required(false))
		.add_source(
			Environment::with_prefix(ENV_PREFIX)
				.prefix_separator("__")
				.separator("__")
				.try_parsing(true),
		)
		.build()?;

	let settings: Settings = s.try_deserialize()?;
	settings.validate()?;
	Ok(settings)
}
