//! Unit-price resolution.

use crate::catalog::{AddOnPolicy, PriceTable, Product};
use crate::selection::ResolvedVariant;
use crate::types::Money;

/// Resolve the unit price for a product and a resolved variant.
///
/// This is a pure, total function: whatever the selection, it returns a
/// defined amount. Missing required selections are a caller-side
/// validation error (rejected before a line is added), never a resolver
/// failure.
///
/// Resolution order, first match wins:
///
/// 1. A [`PriceTable::Matrix`] entry for the (primary, secondary) pair.
/// 2. A [`PriceTable::ByStyle`] entry for the secondary label.
/// 3. The product's base price.
///
/// If `add_on` is set and the policy covers the product's category, the
/// policy's fixed surcharge is added to the result.
#[must_use]
pub fn resolve_unit_price(
    product: &Product,
    variant: &ResolvedVariant,
    add_on: bool,
    policy: Option<&AddOnPolicy>,
) -> Money {
    let table_price = match &product.pricing {
        PriceTable::Flat => None,
        PriceTable::ByStyle(table) => variant
            .secondary
            .as_ref()
            .and_then(|label| table.get(label))
            .copied(),
        PriceTable::Matrix(table) => match (&variant.primary, &variant.secondary) {
            (Some(primary), Some(secondary)) => table
                .get(primary)
                .and_then(|row| row.get(secondary))
                .copied(),
            _ => None,
        },
    };
    let price = table_price.unwrap_or(product.base_price);

    match policy {
        Some(policy) if add_on && policy.applies_to(&product.category) => {
            price + policy.surcharge
        }
        _ => price,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::catalog::Category;
    use crate::types::ProductId;

    fn resolved(primary: Option<&str>, secondary: Option<&str>) -> ResolvedVariant {
        ResolvedVariant {
            primary: primary.map(str::to_owned),
            secondary: secondary.map(str::to_owned),
        }
    }

    fn braids() -> Product {
        Product {
            id: ProductId::new(1),
            name: "Knotless Braids".to_owned(),
            description: String::new(),
            category: Category::new("braids"),
            base_price: Money::from_cents(25_000),
            primary_axis: vec!["Small".to_owned(), "Medium".to_owned()],
            secondary_axis: vec!["Short".to_owned(), "Medium".to_owned(), "Long".to_owned()],
            pricing: PriceTable::Matrix(
                [(
                    "Small".to_owned(),
                    [
                        ("Short".to_owned(), Money::from_cents(35_000)),
                        ("Medium".to_owned(), Money::from_cents(45_000)),
                        ("Long".to_owned(), Money::from_cents(50_000)),
                    ]
                    .into(),
                )]
                .into(),
            ),
            featured: true,
        }
    }

    fn cornrows() -> Product {
        Product {
            id: ProductId::new(4),
            name: "Cornrows".to_owned(),
            description: String::new(),
            category: Category::new("cornrows"),
            base_price: Money::from_cents(10_000),
            primary_axis: vec![],
            secondary_axis: vec!["Free hand".to_owned(), "Styled".to_owned()],
            pricing: PriceTable::ByStyle(
                [
                    ("Free hand".to_owned(), Money::from_cents(10_000)),
                    ("Styled".to_owned(), Money::from_cents(12_000)),
                ]
                .into(),
            ),
            featured: false,
        }
    }

    fn hair_wash() -> AddOnPolicy {
        AddOnPolicy {
            label: "Hair Wash".to_owned(),
            surcharge: Money::from_cents(5_000),
            categories: vec![Category::new("braids"), Category::new("cornrows")],
        }
    }

    #[test]
    fn test_matrix_entry_wins_over_base_price() {
        let price = resolve_unit_price(
            &braids(),
            &resolved(Some("Small"), Some("Medium")),
            false,
            None,
        );
        assert_eq!(price, Money::from_cents(45_000));
    }

    #[test]
    fn test_matrix_falls_back_without_both_labels() {
        let product = braids();
        assert_eq!(
            resolve_unit_price(&product, &resolved(Some("Small"), None), false, None),
            product.base_price
        );
        assert_eq!(
            resolve_unit_price(&product, &resolved(None, Some("Medium")), false, None),
            product.base_price
        );
    }

    #[test]
    fn test_matrix_falls_back_on_unknown_pair() {
        let product = braids();
        // "Medium" size has no matrix row
        assert_eq!(
            resolve_unit_price(&product, &resolved(Some("Medium"), Some("Long")), false, None),
            product.base_price
        );
    }

    #[test]
    fn test_by_style_entry_applies_even_with_primary_set() {
        let price = resolve_unit_price(
            &cornrows(),
            &resolved(Some("anything"), Some("Styled")),
            false,
            None,
        );
        assert_eq!(price, Money::from_cents(12_000));
    }

    #[test]
    fn test_by_style_falls_back_on_unknown_label() {
        let product = cornrows();
        assert_eq!(
            resolve_unit_price(&product, &resolved(None, Some("Waves")), false, None),
            product.base_price
        );
    }

    #[test]
    fn test_flat_ignores_labels() {
        let mut product = cornrows();
        product.pricing = PriceTable::Flat;
        assert_eq!(
            resolve_unit_price(&product, &resolved(None, Some("Styled")), false, None),
            product.base_price
        );
    }

    #[test]
    fn test_add_on_is_additive_over_every_case() {
        let policy = hair_wash();
        // over a matrix price
        assert_eq!(
            resolve_unit_price(
                &braids(),
                &resolved(Some("Small"), Some("Medium")),
                true,
                Some(&policy)
            ),
            Money::from_cents(50_000)
        );
        // over a by-style price
        assert_eq!(
            resolve_unit_price(
                &cornrows(),
                &resolved(None, Some("Styled")),
                true,
                Some(&policy)
            ),
            Money::from_cents(17_000)
        );
        // over a base price
        assert_eq!(
            resolve_unit_price(&braids(), &resolved(Some("Small"), None), true, Some(&policy)),
            Money::from_cents(30_000)
        );
    }

    #[test]
    fn test_add_on_ignored_for_ineligible_category() {
        let mut product = braids();
        product.category = Category::new("service");
        let price = resolve_unit_price(
            &product,
            &resolved(Some("Small"), Some("Medium")),
            true,
            Some(&hair_wash()),
        );
        assert_eq!(price, Money::from_cents(45_000));
    }

    #[test]
    fn test_add_on_requires_flag_and_policy() {
        let product = braids();
        let variant = resolved(Some("Small"), Some("Medium"));
        assert_eq!(
            resolve_unit_price(&product, &variant, false, Some(&hair_wash())),
            Money::from_cents(45_000)
        );
        assert_eq!(
            resolve_unit_price(&product, &variant, true, None),
            Money::from_cents(45_000)
        );
    }

    #[test]
    fn test_surcharge_scenario_150_plus_50() {
        let mut product = cornrows();
        product.base_price = Money::from_cents(15_000);
        product.pricing = PriceTable::Flat;
        let price = resolve_unit_price(&product, &resolved(None, None), true, Some(&hair_wash()));
        assert_eq!(price, Money::from_cents(20_000));
    }
}
