use crate::error::ConfigError;
use chrono::FixedOffset;

// Declare the modules that make up this crate.
pub mod error;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use settings::{Config, History, Server};

/// Loads the application configuration from the `config.toml` file.
///
/// This function is the primary entry point for this crate. It reads the
/// configuration file, deserializes it into our strongly-typed `Config`
/// struct, validates it, and returns it.
pub fn load_config() -> Result<Config, ConfigError> {
    let builder = config::Config::builder()
        // Tells the builder to look for a file named `config.toml`
        .add_source(config::File::with_name("config.toml"))
        .build()?;

    // Attempt to deserialize the entire configuration into our `Config` struct
    let config = builder.try_deserialize::<Config>()?;

    if FixedOffset::east_opt(config.history.utc_offset_hours * 3600).is_none() {
        return Err(ConfigError::ValidationError(format!(
            "history.utc_offset_hours out of range: {}",
            config.history.utc_offset_hours
        )));
    }

    Ok(config)
}
