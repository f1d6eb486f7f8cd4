//! Normalization from raw backend records to [`packmart_core::DisplayProduct`].
//!
//! Category inference is delegated to [`packmart_core::CategoryRules`]; this
//! module focuses on structural conversion and defaulting. Normalization is
//! total: a structurally valid record with every optional field omitted
//! still yields a display row.

use packmart_core::{CategoryRules, DisplayProduct};

use crate::types::RawProduct;

/// Rating shown for products the backend has no reviews for yet.
const DEFAULT_RATING: f32 = 4.5;

/// Material label used when the backend omits the material.
const UNSPECIFIED_MATERIAL: &str = "Unspecified";

/// Placeholder shown when no keyword matches the product.
const FALLBACK_IMAGE: &str = "/placeholder.svg";

/// Keyword-to-asset table for the product name, walked in order.
const NAME_IMAGE_KEYWORDS: &[(&str, &str)] = &[
    ("corrugated", "/corrugated-box.jpg"),
    ("pizza", "/pizza-box.jpg"),
    ("mailer", "/bubble-mailer.jpg"),
    ("bubble", "/bubble-wrap.png"),
    ("stretch", "/stretch-film.jpg"),
    ("tape", "/clear-packing-tape-roll.png"),
    ("box", "/simple-cardboard-box.png"),
];

/// Keyword-to-asset table for the material, tried when the name matched nothing.
const MATERIAL_IMAGE_KEYWORDS: &[(&str, &str)] = &[
    ("cardboard", "/simple-cardboard-box.png"),
    ("board", "/corrugated-box.jpg"),
    ("polyethylene", "/stretch-film.jpg"),
    ("polypropylene", "/clear-packing-tape-roll.png"),
];

/// Normalizes a raw backend record into a [`DisplayProduct`].
///
/// Defaulting rules:
/// - `price` — the `pricePerRange` of the tier with the smallest
///   `initialQuantity`, selected explicitly so backend tier order does not
///   matter; `0` when the record has no tiers. Never negative.
/// - `material` — `"Unspecified"` when absent or empty.
/// - `category` — inferred from the material via `rules`.
/// - `rating` — `4.5` unless the backend reports a rating above zero.
/// - `image` — keyword heuristic over name, then material; always non-empty.
#[must_use]
pub fn normalize_product(product: RawProduct, rules: &CategoryRules) -> DisplayProduct {
    let price = product
        .product_price_ranges
        .iter()
        .min_by_key(|tier| tier.initial_quantity)
        .map_or(0, |tier| tier.price_per_range)
        .max(0);

    let material = product
        .product_details
        .as_ref()
        .and_then(|details| details.material.clone())
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| UNSPECIFIED_MATERIAL.to_string());

    let category = rules.classify(&material);

    let rating = product
        .average_rating
        .filter(|r| *r > 0.0)
        .unwrap_or(DEFAULT_RATING);

    let image = image_for(&product.name, &material);

    DisplayProduct {
        id: product.id,
        name: product.name,
        price,
        category,
        material,
        image,
        rating,
        availability: product.availability,
        description: product.description.unwrap_or_default(),
    }
}

/// Normalizes a whole fetched list. Individual records cannot fail, so the
/// output length always equals the input length.
#[must_use]
pub fn normalize_products(products: Vec<RawProduct>, rules: &CategoryRules) -> Vec<DisplayProduct> {
    let normalized: Vec<DisplayProduct> = products
        .into_iter()
        .map(|p| normalize_product(p, rules))
        .collect();
    tracing::debug!(count = normalized.len(), "normalized product list");
    normalized
}

/// Picks a placeholder asset by case-insensitive keyword match over the
/// product name, then the material. Purely cosmetic; the only guarantee is a
/// non-empty path.
fn image_for(name: &str, material: &str) -> String {
    let name = name.to_lowercase();
    let material = material.to_lowercase();

    NAME_IMAGE_KEYWORDS
        .iter()
        .find(|(keyword, _)| name.contains(keyword))
        .or_else(|| {
            MATERIAL_IMAGE_KEYWORDS
                .iter()
                .find(|(keyword, _)| material.contains(keyword))
        })
        .map_or(FALLBACK_IMAGE, |(_, asset)| asset)
        .to_string()
}
