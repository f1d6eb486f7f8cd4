use super::*;
use crate::categories::Category;

fn product(id: i64, name: &str, price: i64, category: Category, material: &str) -> DisplayProduct {
    DisplayProduct {
        id,
        name: name.to_string(),
        price,
        category,
        material: material.to_string(),
        image: "/placeholder.svg".to_string(),
        rating: 4.5,
        availability: 100,
        description: String::new(),
    }
}

fn sample_catalog() -> Vec<DisplayProduct> {
    vec![
        product(1, "Cardboard box 40x30x20", 25, Category::Boxes, "Cardboard"),
        product(2, "Bubble wrap roll 100m", 450, Category::Film, "Polyethylene"),
        product(3, "Packing tape 50m", 85, Category::Tape, "Polypropylene"),
        product(4, "Stretch film 500mm", 320, Category::Film, "Polyethylene"),
        product(5, "Corrugated box 60x40x40", 45, Category::Boxes, "Cardboard"),
    ]
}

#[test]
fn default_criteria_is_identity() {
    let catalog = sample_catalog();
    let filtered = filter_products(&catalog, &FilterCriteria::default());
    assert_eq!(filtered, catalog);
}

#[test]
fn search_is_case_insensitive_substring() {
    let catalog = sample_catalog();
    let criteria = FilterCriteria {
        search: "BOX".to_string(),
        ..FilterCriteria::default()
    };
    let filtered = filter_products(&catalog, &criteria);
    let ids: Vec<i64> = filtered.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![1, 5]);
}

#[test]
fn search_with_no_hits_returns_empty_not_error() {
    let catalog = sample_catalog();
    let criteria = FilterCriteria {
        search: "nonexistent".to_string(),
        ..FilterCriteria::default()
    };
    assert!(filter_products(&catalog, &criteria).is_empty());
}

#[test]
fn category_filter_is_exact() {
    let catalog = sample_catalog();
    let criteria = FilterCriteria {
        category: Some(Category::Film),
        ..FilterCriteria::default()
    };
    let filtered = filter_products(&catalog, &criteria);
    assert!(filtered.iter().all(|p| p.category == Category::Film));
    assert_eq!(filtered.len(), 2);
}

#[test]
fn material_filter_is_exact() {
    let catalog = sample_catalog();
    let criteria = FilterCriteria {
        material: Some("Cardboard".to_string()),
        ..FilterCriteria::default()
    };
    let filtered = filter_products(&catalog, &criteria);
    let ids: Vec<i64> = filtered.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![1, 5]);
}

#[test]
fn price_bucket_low_excludes_exact_100() {
    assert!(PriceBucket::Low.contains(99));
    assert!(!PriceBucket::Low.contains(100));
}

#[test]
fn price_bucket_medium_is_half_open() {
    assert!(PriceBucket::Medium.contains(100));
    assert!(PriceBucket::Medium.contains(299));
    assert!(!PriceBucket::Medium.contains(300));
    assert!(!PriceBucket::Medium.contains(99));
}

#[test]
fn price_bucket_high_includes_exact_300() {
    assert!(PriceBucket::High.contains(300));
    assert!(!PriceBucket::High.contains(299));
}

#[test]
fn price_boundary_product_moves_to_next_bucket_up() {
    let catalog = vec![
        product(1, "At the low/medium boundary", 100, Category::Boxes, "Cardboard"),
        product(2, "At the medium/high boundary", 300, Category::Boxes, "Cardboard"),
    ];

    let low = filter_products(
        &catalog,
        &FilterCriteria {
            price: PriceBucket::Low,
            ..FilterCriteria::default()
        },
    );
    assert!(low.is_empty());

    let medium = filter_products(
        &catalog,
        &FilterCriteria {
            price: PriceBucket::Medium,
            ..FilterCriteria::default()
        },
    );
    assert_eq!(medium.len(), 1);
    assert_eq!(medium[0].id, 1);

    let high = filter_products(
        &catalog,
        &FilterCriteria {
            price: PriceBucket::High,
            ..FilterCriteria::default()
        },
    );
    assert_eq!(high.len(), 1);
    assert_eq!(high[0].id, 2);
}

#[test]
fn predicates_combine_with_and() {
    let catalog = sample_catalog();
    let criteria = FilterCriteria {
        search: "film".to_string(),
        category: Some(Category::Film),
        material: Some("Polyethylene".to_string()),
        price: PriceBucket::High,
    };
    let filtered = filter_products(&catalog, &criteria);
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].id, 4);
}

#[test]
fn filtering_preserves_input_order() {
    let catalog = sample_catalog();
    let criteria = FilterCriteria {
        category: Some(Category::Boxes),
        ..FilterCriteria::default()
    };
    let filtered = filter_products(&catalog, &criteria);
    let ids: Vec<i64> = filtered.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![1, 5], "relative input order must be preserved");
}

#[test]
fn filtering_does_not_mutate_input() {
    let catalog = sample_catalog();
    let before = catalog.clone();
    let _ = filter_products(
        &catalog,
        &FilterCriteria {
            search: "box".to_string(),
            ..FilterCriteria::default()
        },
    );
    assert_eq!(catalog, before);
}

#[test]
fn price_bucket_from_str() {
    assert_eq!("low".parse::<PriceBucket>().unwrap(), PriceBucket::Low);
    assert_eq!("ALL".parse::<PriceBucket>().unwrap(), PriceBucket::All);
    assert!("cheap".parse::<PriceBucket>().is_err());
}

#[test]
fn related_products_match_category_or_material() {
    let mut catalog = sample_catalog();
    catalog.push(product(6, "Painted crate", 150, Category::Boxes, "Pine"));

    let anchor = &catalog[0]; // Boxes / Cardboard
    let related = related_products(&catalog, anchor, 4);
    let ids: Vec<i64> = related.iter().map(|p| p.id).collect();
    // 5 shares category and material, 6 shares category only.
    assert_eq!(ids, vec![5, 6]);
}

#[test]
fn related_products_excludes_self_and_respects_limit() {
    let catalog = sample_catalog();
    let anchor = &catalog[1]; // Film / Polyethylene
    let related = related_products(&catalog, anchor, 1);
    assert_eq!(related.len(), 1);
    assert_eq!(related[0].id, 4);
}
