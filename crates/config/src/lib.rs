//! Unified Routing Configuration
//!
//! Configuration management and startup utilities for the unified routing service.

pub mod loader;
pub mod settings;
pub mod startup_logger;

pub use loader::{load_config, load_config_from, ConfigLoadError};
pub use settings::{
	ConfigValidationError, FilterSettings, LogFormat, LoggingSettings, QuoterConfig,
	QuotersSettings, ServerSettings, Settings, TimeoutSettings, TokenConfig,
};
pub use startup_logger::{
	log_quoter_setup, log_service_info, log_service_shutdown, log_startup_complete,
};
