mod auth;
mod catalog;
mod products;

use clap::{Parser, Subcommand};
use packmart_api::MarketClient;
use packmart_core::{categories, AppConfig, CategoryRules};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "packmart")]
#[command(about = "Packaging marketplace command line interface")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Browse the catalog with filters and sorting
    Catalog(catalog::CatalogArgs),
    /// Manage the seller's own products
    #[command(subcommand)]
    Products(products::ProductsCommand),
    /// Log in, log out, register, or inspect the session
    #[command(subcommand)]
    Auth(auth::AuthCommand),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = packmart_core::load_app_config_from_env()?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let client = build_client(&config)?;

    match cli.command {
        Commands::Catalog(args) => {
            let rules = load_category_rules(&config);
            catalog::run(&client, &rules, &args).await
        }
        Commands::Products(command) => {
            let rules = load_category_rules(&config);
            products::run(&client, &rules, command).await
        }
        Commands::Auth(command) => auth::run(&client, command).await,
    }
}

fn build_client(config: &AppConfig) -> anyhow::Result<MarketClient> {
    let mut client = MarketClient::new(
        &config.backend_url,
        config.api_timeout_secs,
        &config.api_user_agent,
        config.api_max_retries,
        config.api_retry_backoff_base_ms,
    )?;
    if let Some(session) = &config.session_cookie {
        client = client.with_session(session);
    }
    Ok(client)
}

/// Loads the category rule table from the configured YAML file, falling back
/// to the built-in defaults when the file is missing or invalid.
fn load_category_rules(config: &AppConfig) -> CategoryRules {
    match categories::load_rules(&config.categories_path) {
        Ok(rules) => rules,
        Err(err) => {
            tracing::debug!(
                path = %config.categories_path.display(),
                error = %err,
                "using built-in category rules"
            );
            CategoryRules::default()
        }
    }
}
