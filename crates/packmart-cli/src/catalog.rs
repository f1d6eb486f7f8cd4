//! The `catalog` command: the full browse pipeline against the live backend.
//!
//! Sequencing follows the page flow — session check, then fetch, then the
//! pure pipeline (normalize → filter → sort) over the fetched snapshot.
//! Failures before the pipeline print a human-readable message with a retry
//! hint; they never panic and never render a partial table.

use clap::Args;
use packmart_api::{normalize_products, ApiError, MarketClient, RawProduct};
use packmart_core::{
    filter_products, sort_products, Category, CategoryRules, DisplayProduct, FilterCriteria,
    PriceBucket, SortKey,
};

#[derive(Debug, Args)]
pub struct CatalogArgs {
    /// Substring to search for in product names (case-insensitive)
    #[arg(long, default_value = "")]
    pub search: String,

    /// Restrict to one category (boxes, film, tape, paint-coatings, metal,
    /// construction, insulation, other)
    #[arg(long)]
    pub category: Option<Category>,

    /// Restrict to an exact material label
    #[arg(long)]
    pub material: Option<String>,

    /// Price bucket: all, low (<100), medium (100-299), or high (>=300)
    #[arg(long, default_value = "all")]
    pub price: PriceBucket,

    /// Ordering: popular, price-asc, price-desc, or rating
    #[arg(long, default_value = "popular")]
    pub sort: SortKey,
}

impl CatalogArgs {
    fn criteria(&self) -> FilterCriteria {
        FilterCriteria {
            search: self.search.clone(),
            category: self.category,
            material: self.material.clone(),
            price: self.price,
        }
    }
}

pub async fn run(
    client: &MarketClient,
    rules: &CategoryRules,
    args: &CatalogArgs,
) -> anyhow::Result<()> {
    match client.require_auth().await {
        Ok(_) => {}
        Err(ApiError::AuthenticationRequired) => {
            println!("You are not logged in.");
            println!("Run `packmart auth login` or `packmart auth register` first.");
            return Ok(());
        }
        Err(err) => {
            println!("Could not reach the marketplace backend: {err}");
            println!("Check PACKMART_BACKEND_URL and run the command again.");
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

    let view = build_view(raw, &args.criteria(), args.sort, rules);
    render(&view);
    Ok(())
}

/// The whole catalog pipeline as one pure function over explicit inputs:
/// the fetched snapshot, the filter selections, and the sort key.
#[must_use]
pub fn build_view(
    raw: Vec<RawProduct>,
    criteria: &FilterCriteria,
    sort_key: SortKey,
    rules: &CategoryRules,
) -> Vec<DisplayProduct> {
    let normalized = normalize_products(raw, rules);
    let filtered = filter_products(&normalized, criteria);
    sort_products(&filtered, sort_key)
}

fn render(view: &[DisplayProduct]) {
    if view.is_empty() {
        println!("No products matched.");
        return;
    }

    println!("Found {} product(s)", view.len());
    println!("{:>6}  {:<40} {:<16} {:>8}  {:>6}", "id", "name", "category", "price", "rating");
    for product in view {
        println!(
            "{:>6}  {:<40} {:<16} {:>8}  {:>6.1}",
            product.id,
            product.name,
            product.category.to_string(),
            product.price,
            product.rating,
        );
    }
}
