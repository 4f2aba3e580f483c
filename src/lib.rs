pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod render;
pub mod server;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Command};
pub use config::TomlConfig;

pub use adapters::SupabaseClient;
pub use self::core::{contact::build_vcard, fetcher::CardFetcher};
pub use domain::model::{Card, CardBundle, CardLink, CardTemplate};
pub use utils::error::{CardError, Result};
