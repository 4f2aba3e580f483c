#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::{CliConfig, Command};
pub use toml_config::TomlConfig;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_non_empty_string, validate_positive_number, validate_range, validate_socket_addr,
    validate_url,
};

pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:3000";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_CACHE_TTL_SECS: u64 = 60;
pub const DEFAULT_CACHE_MAX_ENTRIES: u64 = 1_000;

/// Checks shared by every configuration source.
pub fn validate_settings<C: ConfigProvider + ?Sized>(config: &C) -> Result<()> {
    validate_url("backend.url", config.backend_url())?;
    validate_non_empty_string("backend.anon_key", config.anon_key())?;
    validate_socket_addr("server.bind", config.bind_address())?;
    validate_range(
        "backend.request_timeout_seconds",
        config.request_timeout().as_secs(),
        1,
        300,
    )?;
    validate_positive_number("cache.max_entries", config.cache_max_entries() as usize, 1)?;
    Ok(())
}
