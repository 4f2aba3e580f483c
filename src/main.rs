use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use virtual_card::core::contact::build_vcard;
use virtual_card::core::ConfigProvider;
use virtual_card::render::render_card_page;
use virtual_card::utils::{logger, validation::Validate};
use virtual_card::{server, CardError, CardFetcher, CliConfig, Command, SupabaseClient, TomlConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let file_config = match &cli.config {
        Some(path) => match TomlConfig::from_file(path) {
            Ok(config) => Some(config),
            Err(e) => exit_with(&e, 1),
        },
        None => None,
    };

    let json_logs = cli.json_logs || file_config.as_ref().is_some_and(TomlConfig::json_logs);
    if json_logs {
        logger::init_json_logger();
    } else {
        let verbose =
            cli.verbose || file_config.as_ref().is_some_and(TomlConfig::verbose_logging);
        logger::init_cli_logger(verbose);
    }

    tracing::info!("Starting virtual-card");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let validation = match &file_config {
        Some(config) => config.validate(),
        None => cli.validate(),
    };
    if let Err(e) = validation {
        tracing::error!("❌ Configuration validation failed: {}", e);
        exit_with(&e, 1);
    }

    let settings: &dyn ConfigProvider = match &file_config {
        Some(config) => config,
        None => &cli,
    };

    let backend = SupabaseClient::from_config(settings)?;
    let fetcher = Arc::new(CardFetcher::with_cache(
        backend,
        settings.cache_ttl(),
        settings.cache_max_entries(),
    ));

    match cli.command.clone().unwrap_or(Command::Serve) {
        Command::Serve => {
            if let Err(e) = server::serve(settings.bind_address(), fetcher).await {
                tracing::error!("❌ Server failed: {}", e);
                exit_with(&e, 2);
            }
        }
        Command::Render { public_id, output } => {
            let Some(bundle) = fetcher.fetch(&public_id).await else {
                exit_not_found(&public_id);
            };
            emit(render_card_page(&bundle), output)?;
        }
        Command::Vcard { public_id, output } => {
            let Some(bundle) = fetcher.fetch(&public_id).await else {
                exit_not_found(&public_id);
            };
            emit(build_vcard(&bundle.card, &bundle.links), output)?;
        }
    }

    Ok(())
}

fn emit(content: String, output: Option<PathBuf>) -> anyhow::Result<()> {
    match output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&path, content)?;
            tracing::info!("📁 Output saved to: {}", path.display());
        }
        None => println!("{}", content),
    }
    Ok(())
}

fn exit_not_found(public_id: &str) -> ! {
    tracing::warn!("Card '{}' not found or not published", public_id);
    eprintln!("❌ Card '{}' not found", public_id);
    std::process::exit(4);
}

fn exit_with(error: &CardError, code: i32) -> ! {
    eprintln!("❌ {}", error.user_friendly_message());
    eprintln!("💡 {}", error.recovery_suggestion());
    std::process::exit(code);
}
