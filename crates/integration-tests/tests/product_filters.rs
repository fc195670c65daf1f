//! Integration tests for the product filter pipeline over the bundled catalog.

#![allow(clippy::unwrap_used)]

use std::sync::Arc;

use rust_decimal::Decimal;
use toyclub_core::filter::DEFAULT_PRICE_CEILING;
use toyclub_core::{FilterCriteria, Product, apply_filters};
use toyclub_integration_tests::{bundled_session, small_session};

fn ids(products: &[Arc<Product>]) -> Vec<String> {
    products.iter().map(|p| p.id.to_string()).collect()
}

// =============================================================================
// Category
// =============================================================================

#[test]
fn test_category_filter_is_exact_and_ordered() {
    let (session, _) = bundled_session().unwrap();
    let criteria = session.criteria_from_query("category=dolls");

    let first = session.browse(&criteria);
    assert_eq!(ids(&first), vec!["doll-fashion-studio", "doll-baby-care-set"]);
    assert!(first.iter().all(|p| p.category.as_deref() == Some("dolls")));

    let second = session.browse(&criteria);
    assert_eq!(first, second);
}

#[test]
fn test_category_filter_excludes_uncategorized() {
    let (session, _) = bundled_session().unwrap();
    let mut criteria = session.default_criteria();
    criteria.set_category("Dolls");

    assert!(session.browse(&criteria).is_empty());

    criteria.toggle_category("plush");
    assert!(
        session
            .browse(&criteria)
            .iter()
            .all(|p| p.id != "mystery-grab-bag")
    );
}

// =============================================================================
// Price
// =============================================================================

#[test]
fn test_untouched_bounds_return_full_catalog() {
    let (session, _) = bundled_session().unwrap();
    let criteria = session.default_criteria();

    assert!(!criteria.price_filter_active());
    assert_eq!(
        ids(&session.browse(&criteria)),
        ids(session.catalog().products())
    );
}

#[test]
fn test_fixed_ceiling_hides_products_above_it_once_touched() {
    let (session, _) = bundled_session().unwrap();
    let mut criteria = FilterCriteria::with_ceiling(DEFAULT_PRICE_CEILING);
    assert_eq!(
        apply_filters(session.catalog(), &criteria).len(),
        session.catalog().len()
    );

    criteria.set_price_range(Decimal::ONE, DEFAULT_PRICE_CEILING);
    let products = apply_filters(session.catalog(), &criteria);
    assert!(criteria.price_filter_active());
    assert!(products.iter().all(|p| p.id != "edu-stem-robot-kit"));
    assert!(
        products
            .iter()
            .all(|p| p.price >= Decimal::ONE && p.price <= DEFAULT_PRICE_CEILING)
    );
}

#[test]
fn test_catalog_ceiling_keeps_expensive_products_reachable() {
    let (session, _) = bundled_session().unwrap();
    let mut criteria = session.default_criteria();
    assert_eq!(criteria.price_ceiling, Decimal::from(129));

    criteria.set_price_range(Decimal::from(40), criteria.price_ceiling);
    assert_eq!(
        ids(&session.browse(&criteria)),
        vec!["veh-rc-monster-truck", "edu-stem-robot-kit"]
    );
}

#[test]
fn test_price_bounds_from_query() {
    let (session, _) = bundled_session().unwrap();
    let criteria = session.criteria_from_query("min_price=10&max_price=12.99");

    assert_eq!(
        ids(&session.browse(&criteria)),
        vec!["af-galaxy-ranger", "plush-dino-buddy", "cre-paint-party"]
    );
}

// =============================================================================
// Age Range
// =============================================================================

#[test]
fn test_age_filter_is_substring_match() {
    let (session, _) = small_session().unwrap();
    let criteria = session.criteria_from_query("age=3%2B");

    assert_eq!(ids(&session.browse(&criteria)), vec!["bunny", "racer"]);

    let criteria = session.criteria_from_query("age=%2B");
    assert_eq!(
        ids(&session.browse(&criteria)),
        vec!["bear", "bunny", "racer", "robot"]
    );
}

// =============================================================================
// Combined
// =============================================================================

#[test]
fn test_filters_combine_with_and() {
    let (session, _) = bundled_session().unwrap();
    let mut criteria = session.criteria_from_query("category=vehicles&age=3%2B");
    assert_eq!(ids(&session.browse(&criteria)), vec!["veh-turbo-racer"]);

    criteria.set_price_range(Decimal::from(5), criteria.price_ceiling);
    assert!(session.browse(&criteria).is_empty());

    criteria.clear();
    assert!(!criteria.has_active_filters());
    assert_eq!(session.browse(&criteria).len(), session.catalog().len());
}

#[test]
fn test_filtering_never_mutates_catalog() {
    let (session, _) = bundled_session().unwrap();
    let before = ids(session.catalog().products());

    let criteria = session.criteria_from_query("category=plush&min_price=9");
    let _ = session.browse(&criteria);
    let _ = session.browse(&criteria);

    assert_eq!(ids(session.catalog().products()), before);
}
