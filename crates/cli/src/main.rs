//! Artisan Gallery CLI - Catalog tools and a scripted demo session.
//!
//! # Usage
//!
//! ```bash
//! # Search the catalog
//! gallery-cli search bronze
//!
//! # Validate a YAML catalog file
//! gallery-cli catalog validate catalog.yaml
//!
//! # Run the scripted cart/wishlist/sign-out session
//! gallery-cli demo
//! ```
//!
//! The catalog is the built-in gallery unless `GALLERY_CATALOG_PATH` names a
//! JSON catalog file.

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};
use sentry::integrations::tracing as sentry_tracing;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use artisan_gallery_storefront::config::StorefrontConfig;

mod commands;

#[derive(Parser)]
#[command(name = "gallery-cli")]
#[command(author, version, about = "Artisan Gallery CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search the catalog by name, description, category, or artist
    Search {
        /// Case-insensitive substring to look for
        query: String,
    },
    /// Catalog file tools
    Catalog {
        #[command(subcommand)]
        action: CatalogAction,
    },
    /// Run a scripted session and log every notification
    Demo,
}

#[derive(Subcommand)]
enum CatalogAction {
    /// Check a YAML catalog file for duplicate ids and invalid images
    Validate {
        /// Path to the YAML file
        file: String,
    },
}

/// Initialize Sentry error tracking and return guard that must be kept alive.
fn init_sentry(config: &StorefrontConfig) -> Option<sentry::ClientInitGuard> {
    let dsn = config.sentry_dsn.as_ref()?;

    let guard = sentry::init((
        dsn.as_str(),
        sentry::ClientOptions {
            release: sentry::release_name!(),
            environment: config
                .sentry_environment
                .clone()
                .map(std::borrow::Cow::Owned),
            attach_stacktrace: true,
            ..Default::default()
        },
    ));

    tracing::info!("Sentry initialized");
    Some(guard)
}

/// Filter tracing events to Sentry event types.
fn sentry_event_filter(metadata: &tracing::Metadata<'_>) -> sentry_tracing::EventFilter {
    match *metadata.level() {
        tracing::Level::ERROR | tracing::Level::WARN => sentry_tracing::EventFilter::Event,
        tracing::Level::INFO | tracing::Level::DEBUG => sentry_tracing::EventFilter::Breadcrumb,
        _ => sentry_tracing::EventFilter::Ignore,
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match StorefrontConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing_subscriber::fmt::init();
            tracing::error!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    // Sentry must be initialized before the tracing subscriber
    let _sentry_guard = init_sentry(&config);

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "gallery_cli=info,artisan_gallery_storefront=info".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .with(sentry_tracing::layer().event_filter(sentry_event_filter))
        .init();

    if let Err(e) = run(cli, config).await {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli, config: StorefrontConfig) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Search { query } => commands::search::run(&config, &query)?,
        Commands::Catalog { action } => match action {
            CatalogAction::Validate { file } => commands::catalog::validate(&file).await?,
        },
        Commands::Demo => commands::demo::run(config).await?,
    }
    Ok(())
}
