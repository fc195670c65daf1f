//! Catalog browsing commands.
//!
//! # Usage
//!
//! ```bash
//! toyclub products --category plush --age 0+
//! toyclub products --min-price 10
//! toyclub product doll-fashion-studio
//! toyclub categories
//! toyclub featured
//! ```

use std::io::Write;

use rust_decimal::Decimal;
use toyclub_core::catalog::category_name;
use toyclub_core::{FilterCriteria, Product};
use toyclub_storefront::StorefrontSession;

/// Filter flags as given on the command line.
#[derive(Debug, Default)]
pub struct ListFilters {
    pub category: Option<String>,
    pub min_price: Option<Decimal>,
    pub max_price: Option<Decimal>,
    pub age: Option<String>,
    pub query: Option<String>,
}

/// Turn command-line flags into criteria. Explicit flags override the query.
fn build_criteria(session: &StorefrontSession, filters: &ListFilters) -> FilterCriteria {
    let mut criteria = filters.query.as_deref().map_or_else(
        || session.default_criteria(),
        |q| session.criteria_from_query(q),
    );

    if let Some(category) = &filters.category {
        criteria.set_category(category);
    }
    if let Some(age) = &filters.age {
        criteria.set_age_range(age);
    }
    if filters.min_price.is_some() || filters.max_price.is_some() {
        let min = filters.min_price.unwrap_or(criteria.price.min);
        let max = filters.max_price.unwrap_or(criteria.price.max);
        criteria.set_price_range(min, max);
    }
    criteria
}

/// List products matching the filters.
///
/// # Errors
///
/// Returns an error if writing to stdout fails.
pub fn list(
    session: &StorefrontSession,
    filters: &ListFilters,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let criteria = build_criteria(session, filters);
    let products = session.browse(&criteria);
    let mut out = std::io::stdout().lock();

    if json {
        let products: Vec<&Product> = products.iter().map(AsRef::as_ref).collect();
        serde_json::to_writer_pretty(&mut out, &products)?;
        writeln!(out)?;
        return Ok(());
    }

    writeln!(out, "Showing {} products", products.len())?;
    for product in &products {
        write_row(&mut out, product)?;
    }
    if products.is_empty() && criteria.has_active_filters() {
        writeln!(out, "No products match the active filters.")?;
    }
    Ok(())
}

/// Show one product and its related products.
///
/// # Errors
///
/// Returns an error if the product does not exist or writing fails.
pub fn show(
    session: &StorefrontSession,
    id: &str,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let product = session.product(id)?;
    let related = session.related_products(id);
    let mut out = std::io::stdout().lock();

    if json {
        let related: Vec<&Product> = related.iter().map(AsRef::as_ref).collect();
        let value = serde_json::json!({ "product": &**product, "related": related });
        serde_json::to_writer_pretty(&mut out, &value)?;
        writeln!(out)?;
        return Ok(());
    }

    writeln!(out, "{}", product.name)?;
    writeln!(out, "  id:        {}", product.id)?;
    writeln!(out, "  price:     {} per unit", product.unit_price())?;
    writeln!(out, "  min order: {}", product.min_order())?;
    writeln!(out, "  stock:     {}", product.stock_level().label())?;
    writeln!(
        out,
        "  ages:      {}",
        product.age_range.as_deref().unwrap_or("All Ages")
    )?;
    if let Some(category) = product.category.as_deref() {
        writeln!(
            out,
            "  category:  {}",
            category_name(category).unwrap_or(category)
        )?;
    }
    if let Some(description) = &product.description {
        writeln!(out, "\n{description}")?;
    }

    if !related.is_empty() {
        writeln!(out, "\nYou may also like:")?;
        for product in &related {
            write_row(&mut out, product)?;
        }
    }
    Ok(())
}

/// List the catalog's categories.
///
/// # Errors
///
/// Returns an error if writing to stdout fails.
pub fn categories(
    session: &StorefrontSession,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let tags = session.catalog().categories();
    let mut out = std::io::stdout().lock();

    if json {
        serde_json::to_writer_pretty(&mut out, &tags)?;
        writeln!(out)?;
        return Ok(());
    }

    for tag in tags {
        writeln!(out, "{tag:<16} {}", category_name(tag).unwrap_or(tag))?;
    }
    Ok(())
}

/// List featured products.
///
/// # Errors
///
/// Returns an error if writing to stdout fails.
pub fn featured(
    session: &StorefrontSession,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let products = session.catalog().featured();
    let mut out = std::io::stdout().lock();

    if json {
        let products: Vec<&Product> = products.iter().map(AsRef::as_ref).collect();
        serde_json::to_writer_pretty(&mut out, &products)?;
        writeln!(out)?;
        return Ok(());
    }

    for product in &products {
        write_row(&mut out, product)?;
    }
    Ok(())
}

fn write_row(out: &mut impl Write, product: &Product) -> std::io::Result<()> {
    writeln!(
        out,
        "{:<24} {:<32} {:>9}  {:<13} {}",
        product.id.as_str(),
        product.name,
        product.unit_price().to_string(),
        product.stock_level().label(),
        product.age_range.as_deref().unwrap_or("All Ages"),
    )
}
