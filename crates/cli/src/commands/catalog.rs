//! Catalog inspection commands.

use spaza_core::{PriceTable, Product, ProductId};
use spaza_storefront::StorefrontConfig;

/// List every product with its id, category, and base price.
///
/// # Errors
///
/// Returns an error if the configured catalog cannot be loaded.
pub fn list(config: &StorefrontConfig) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = config.load_catalog()?;

    println!("{} -> wa.me/{}", catalog.store_name, catalog.recipient);
    for product in &catalog.products {
        let featured = if product.featured { "*" } else { " " };
        println!(
            "{:>4} {featured} {:<28} {:<10} from {}",
            product.id.as_i32(),
            product.name,
            product.category.as_str(),
            product.base_price
        );
    }
    Ok(())
}

/// Show one product in full: axes, price table, add-on eligibility.
///
/// # Errors
///
/// Returns an error if the catalog cannot be loaded or the id is unknown.
pub fn show(config: &StorefrontConfig, id: i32) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = config.load_catalog()?;
    let id = ProductId::new(id);
    let product = catalog
        .find(id)
        .ok_or_else(|| format!("no product with id {id}"))?;

    println!("{} ({})", product.name, product.category);
    if !product.description.is_empty() {
        println!("  {}", product.description);
    }
    println!("  Base price: {}", product.base_price);
    print_axis(catalog.profile.primary_label(), &product.primary_axis);
    print_axis(catalog.profile.secondary_label(), &product.secondary_axis);
    print_table(product);

    if let Some(policy) = &catalog.add_on {
        if policy.applies_to(&product.category) {
            println!("  {} available (+{})", policy.label, policy.surcharge);
        }
    }
    Ok(())
}

fn print_axis(label: &str, options: &[String]) {
    if !options.is_empty() {
        println!("  {label}: {}", options.join(", "));
    }
}

fn print_table(product: &Product) {
    match &product.pricing {
        PriceTable::Flat => {}
        PriceTable::ByStyle(table) => {
            for (label, price) in table {
                println!("    {label}: {price}");
            }
        }
        PriceTable::Matrix(table) => {
            for (primary, row) in table {
                for (secondary, price) in row {
                    println!("    {primary} / {secondary}: {price}");
                }
            }
        }
    }
}
