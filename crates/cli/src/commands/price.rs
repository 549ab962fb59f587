//! Unit-price resolution command.

use spaza_core::{AxisChoice, ProductId, VariantSelection, resolve_unit_price};
use spaza_storefront::StorefrontConfig;

/// Resolve and print the unit price for a selection.
///
/// Omitted axes are left unset, so a product that requires a choice
/// reports the same validation error the cart would.
///
/// # Errors
///
/// Returns an error if the catalog cannot be loaded, the id is unknown,
/// or a required axis label was omitted.
pub fn resolve(
    config: &StorefrontConfig,
    id: i32,
    primary: Option<String>,
    secondary: Option<String>,
    add_on: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = config.load_catalog()?;
    let id = ProductId::new(id);
    let product = catalog
        .find(id)
        .ok_or_else(|| format!("no product with id {id}"))?;

    let selection = VariantSelection {
        primary: primary.map_or(AxisChoice::Unset, AxisChoice::Picked),
        secondary: secondary.map_or(AxisChoice::Unset, AxisChoice::Picked),
    };
    let variant = selection.resolve(product)?;
    let price = resolve_unit_price(product, &variant, add_on, catalog.add_on.as_ref());

    println!("{price}");
    Ok(())
}
