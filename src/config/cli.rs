use super::{
    validate_settings, DEFAULT_BIND_ADDRESS, DEFAULT_CACHE_MAX_ENTRIES, DEFAULT_CACHE_TTL_SECS,
    DEFAULT_REQUEST_TIMEOUT_SECS,
};
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_required_field, Validate};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, Parser)]
#[command(name = "virtual-card")]
#[command(about = "Serves public digital business card pages")]
pub struct CliConfig {
    #[arg(long, global = true, help = "Load settings from a TOML file instead of flags")]
    pub config: Option<PathBuf>,

    #[arg(long, global = true, env = "SUPABASE_URL")]
    pub backend_url: Option<String>,

    #[arg(long, global = true, env = "SUPABASE_ANON_KEY", hide_env_values = true)]
    pub anon_key: Option<String>,

    #[arg(long, global = true, env = "VIRTUAL_CARD_BIND", default_value = DEFAULT_BIND_ADDRESS)]
    pub bind: String,

    #[arg(long, global = true, default_value_t = DEFAULT_CACHE_TTL_SECS, help = "0 disables the card cache")]
    pub cache_ttl_seconds: u64,

    #[arg(long, global = true, default_value_t = DEFAULT_CACHE_MAX_ENTRIES)]
    pub cache_max_entries: u64,

    #[arg(long, global = true, default_value_t = DEFAULT_REQUEST_TIMEOUT_SECS)]
    pub request_timeout_seconds: u64,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Run the HTTP server (default)
    Serve,
    /// Render one card page as HTML
    Render {
        public_id: String,
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Print or save the vCard for one card
    Vcard {
        public_id: String,
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

impl ConfigProvider for CliConfig {
    fn backend_url(&self) -> &str {
        self.backend_url.as_deref().unwrap_or_default()
    }

    fn anon_key(&self) -> &str {
        self.anon_key.as_deref().unwrap_or_default()
    }

    fn bind_address(&self) -> &str {
        &self.bind
    }

    fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_seconds)
    }

    fn cache_max_entries(&self) -> u64 {
        self.cache_max_entries
    }

    fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_required_field("backend_url", &self.backend_url)?;
        validate_required_field("anon_key", &self.anon_key)?;
        validate_settings(self)
    }
}
