//! Seller product management: the dashboard listing plus create/clear.

use std::path::PathBuf;

use clap::{Args, Subcommand};
use packmart_api::{normalize_products, ApiError, MarketClient, NewProduct};
use packmart_core::CategoryRules;

#[derive(Debug, Subcommand)]
pub enum ProductsCommand {
    /// List the seller's products with stock badges
    List,
    /// Publish a new product from a JSON payload file
    Add(AddArgs),
    /// Delete every product of the seller
    Clear(ClearArgs),
}

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Path to a JSON file with the product payload
    #[arg(long)]
    pub file: PathBuf,
}

#[derive(Debug, Args)]
pub struct ClearArgs {
    /// Actually delete; without this flag nothing happens
    #[arg(long)]
    pub yes: bool,
}

pub async fn run(
    client: &MarketClient,
    rules: &CategoryRules,
    command: ProductsCommand,
) -> anyhow::Result<()> {
    match command {
        ProductsCommand::List => list(client, rules).await,
        ProductsCommand::Add(args) => add(client, &args).await,
        ProductsCommand::Clear(args) => clear(client, &args).await,
    }
}

async fn list(client: &MarketClient, rules: &CategoryRules) -> anyhow::Result<()> {
    match client.require_auth().await {
        Ok(status) => {
            if let Some(email) = status.seller_email {
                println!("Products of {email}");
            }
        }
        Err(ApiError::AuthenticationRequired) => {
            println!("You are not logged in.");
            println!("Run `packmart auth login` or `packmart auth register` first.");
            return Ok(());
        }
        Err(err) => {
            println!("Could not reach the marketplace backend: {err}");
            return Ok(());
        }
    }

    let raw = match client.fetch_products().await {
        Ok(raw) => raw,
        Err(err) => {
            println!("Failed to load products: {err}");
            println!("Run the command again once the backend is reachable.");
            return Ok(());
        }
    };

    let products = normalize_products(raw, rules);
    if products.is_empty() {
        println!("You have no products yet. Publish one with `packmart products add`.");
        return Ok(());
    }

    println!("{} product(s)", products.len());
    for product in &products {
        println!(
            "{:>6}  {:<40} {:>8}  {:>6} pcs  [{}]",
            product.id,
            product.name,
            product.price,
            product.availability,
            product.stock_status(),
        );
    }
    Ok(())
}

async fn add(client: &MarketClient, args: &AddArgs) -> anyhow::Result<()> {
    let payload = std::fs::read_to_string(&args.file)
        .map_err(|e| anyhow::anyhow!("cannot read {}: {e}", args.file.display()))?;
    let product: NewProduct = serde_json::from_str(&payload)
        .map_err(|e| anyhow::anyhow!("invalid product payload: {e}"))?;

    let problems = validate_new_product(&product);
    if !problems.is_empty() {
        println!("The payload is not publishable:");
        for problem in &problems {
            println!("  - {problem}");
        }
        anyhow::bail!("{} validation error(s)", problems.len());
    }

    match client.create_product(&product).await {
        Ok(response) => {
            println!(
                "{}",
                response.message.unwrap_or_else(|| "product added".to_string())
            );
            Ok(())
        }
        Err(ApiError::AuthenticationRequired) => {
            println!("You are not logged in.");
            println!("Run `packmart auth login` or `packmart auth register` first.");
            Ok(())
        }
        Err(err) => Err(err.into()),
    }
}

async fn clear(client: &MarketClient, args: &ClearArgs) -> anyhow::Result<()> {
    if !args.yes {
        println!("This deletes every product of the seller. Pass --yes to confirm.");
        return Ok(());
    }
    match client.delete_all_products().await {
        Ok(()) => {
            println!("All products deleted.");
            Ok(())
        }
        Err(ApiError::AuthenticationRequired) => {
            println!("You are not logged in.");
            Ok(())
        }
        Err(err) => Err(err.into()),
    }
}

/// Client-side validation applied before a payload is sent, matching what the
/// seller form enforces. Returns every problem found, not just the first.
#[must_use]
pub fn validate_new_product(product: &NewProduct) -> Vec<String> {
    let mut problems = Vec::new();

    if product.name.trim().is_empty() {
        problems.push("name must be non-empty".to_string());
    }
    if product.availability < 0 {
        problems.push("availability must be zero or more".to_string());
    }
    if product.description.trim().is_empty() {
        problems.push("description must be non-empty".to_string());
    }
    if product.detailed_description.trim().is_empty() {
        problems.push("detailed description must be non-empty".to_string());
    }

    let details = &product.product_details;
    for (label, value) in [
        ("size", &details.size),
        ("weight", &details.weight),
        ("material", &details.material),
        ("color", &details.color),
        ("load capacity", &details.load_capacity),
    ] {
        if value.trim().is_empty() {
            problems.push(format!("{label} must be non-empty"));
        }
    }
    if details.minimum_order_starts_from < 1 {
        problems.push("minimum order must be at least 1".to_string());
    }

    if product.product_price_ranges.is_empty() {
        problems.push("at least one price range is required".to_string());
    }
    for (idx, range) in product.product_price_ranges.iter().enumerate() {
        let n = idx + 1;
        if range.initial_quantity <= 0 {
            problems.push(format!("range {n}: initial quantity must be positive"));
        }
        if range.price_per_range < 0 {
            problems.push(format!("range {n}: price must be zero or more"));
        }
        if let Some(final_quantity) = range.final_quantity {
            if final_quantity < range.initial_quantity {
                problems.push(format!(
                    "range {n}: final quantity must be >= initial quantity"
                ));
            }
        }
    }

    problems
}
