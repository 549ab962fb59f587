//! The shopping cart: an ordered list of priced lines.

use spaza_core::{
    AddOnPolicy, Category, Money, Product, ProductId, VariantSelection, resolve_unit_price,
};

use crate::error::CheckoutError;

/// One purchased unit.
///
/// Product data is captured by value at add time, so later catalog edits
/// never retroactively alter an existing line. The unit price is resolved
/// once, when the line is created, and frozen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLine {
    /// The product this line was created from.
    pub product_id: ProductId,
    /// Product name at add time.
    pub name: String,
    /// Product category at add time.
    pub category: Category,
    /// Resolved primary-axis label, if the product had one.
    pub primary: Option<String>,
    /// Resolved secondary-axis label, if the product had one.
    pub secondary: Option<String>,
    /// Unit price frozen at add time.
    pub unit_price: Money,
    /// Whether the add-on service was attached (already masked by
    /// category eligibility).
    pub add_on: bool,
    quantity: u32,
}

impl CartLine {
    /// The line quantity. Always at least 1.
    #[must_use]
    pub const fn quantity(&self) -> u32 {
        self.quantity
    }

    /// `unit_price x quantity`.
    #[must_use]
    pub fn line_total(&self) -> Money {
        self.unit_price.times(self.quantity)
    }
}

/// An ordered sequence of [`CartLine`]s.
///
/// Lines keep insertion order, and identical selections are appended as
/// separate lines - the cart never merges.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// An empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// The lines in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Number of lines (not summed quantities).
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Resolve the selection, price it, and append a new line with
    /// quantity 1.
    ///
    /// The `add_on` flag only sticks when the policy covers the product's
    /// category; for any other product it is silently dropped.
    ///
    /// # Errors
    ///
    /// [`CheckoutError::MissingVariantSelection`] when the product offers
    /// labels on an axis and the selection leaves it unset; the cart is
    /// unchanged.
    pub fn add_line(
        &mut self,
        product: &Product,
        selection: &VariantSelection,
        add_on: bool,
        policy: Option<&AddOnPolicy>,
    ) -> Result<(), CheckoutError> {
        let variant = selection.resolve(product)?;
        let add_on = add_on && policy.is_some_and(|p| p.applies_to(&product.category));
        let unit_price = resolve_unit_price(product, &variant, add_on, policy);

        self.lines.push(CartLine {
            product_id: product.id,
            name: product.name.clone(),
            category: product.category.clone(),
            primary: variant.primary,
            secondary: variant.secondary,
            unit_price,
            add_on,
            quantity: 1,
        });
        Ok(())
    }

    /// Remove and return the line at `index`; the remaining lines keep
    /// their relative order.
    ///
    /// # Errors
    ///
    /// [`CheckoutError::LineOutOfRange`] for an invalid index.
    pub fn remove_line(&mut self, index: usize) -> Result<CartLine, CheckoutError> {
        if index >= self.lines.len() {
            return Err(CheckoutError::LineOutOfRange {
                index,
                len: self.lines.len(),
            });
        }
        Ok(self.lines.remove(index))
    }

    /// Set the quantity of the line at `index`.
    ///
    /// # Errors
    ///
    /// [`CheckoutError::InvalidQuantity`] for a quantity of 0 - the line
    /// is left unchanged, not clamped and not deleted.
    /// [`CheckoutError::LineOutOfRange`] for an invalid index.
    pub fn set_quantity(&mut self, index: usize, quantity: u32) -> Result<(), CheckoutError> {
        let len = self.lines.len();
        let line = self
            .lines
            .get_mut(index)
            .ok_or(CheckoutError::LineOutOfRange { index, len })?;
        if quantity < 1 {
            return Err(CheckoutError::InvalidQuantity);
        }
        line.quantity = quantity;
        Ok(())
    }

    /// Sum of line totals. Exactly [`Money::ZERO`] for an empty cart.
    #[must_use]
    pub fn total(&self) -> Money {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// Drop every line. Used after an order is handed off.
    pub fn clear(&mut self) {
        self.lines.clear();
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use spaza_core::{AxisChoice, PriceTable};

    fn wig_install() -> Product {
        Product {
            id: ProductId::new(6),
            name: "Wig Installation".to_owned(),
            description: String::new(),
            category: Category::new("service"),
            base_price: Money::from_cents(15_000),
            primary_axis: vec![],
            secondary_axis: vec![],
            pricing: PriceTable::Flat,
            featured: false,
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
            secondary_axis: vec!["Short".to_owned(), "Medium".to_owned()],
            pricing: PriceTable::Flat,
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

    fn small_medium() -> VariantSelection {
        VariantSelection {
            primary: AxisChoice::picked("Small"),
            secondary: AxisChoice::picked("Medium"),
        }
    }

    #[test]
    fn test_add_line_without_selection_succeeds_for_no_axes() {
        let mut cart = Cart::new();
        cart.add_line(&wig_install(), &VariantSelection::none(), false, None)
            .unwrap();
        let line = &cart.lines()[0];
        assert_eq!(line.unit_price, Money::from_cents(15_000));
        assert_eq!(line.primary, None);
        assert_eq!(line.quantity(), 1);
    }

    #[test]
    fn test_add_line_missing_selection_leaves_cart_unchanged() {
        let mut cart = Cart::new();
        let result = cart.add_line(&braids(), &VariantSelection::none(), false, None);
        assert!(matches!(
            result,
            Err(CheckoutError::MissingVariantSelection(_))
        ));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_identical_selections_append_separate_lines() {
        let mut cart = Cart::new();
        for _ in 0..3 {
            cart.add_line(&braids(), &small_medium(), false, None).unwrap();
        }
        assert_eq!(cart.len(), 3);
    }

    #[test]
    fn test_add_on_dropped_for_ineligible_category() {
        let mut cart = Cart::new();
        let policy = hair_wash();
        cart.add_line(&wig_install(), &VariantSelection::none(), true, Some(&policy))
            .unwrap();
        let line = &cart.lines()[0];
        assert!(!line.add_on);
        assert_eq!(line.unit_price, Money::from_cents(15_000));
    }

    #[test]
    fn test_add_on_sticks_for_eligible_category() {
        let mut cart = Cart::new();
        let policy = hair_wash();
        cart.add_line(&braids(), &small_medium(), true, Some(&policy))
            .unwrap();
        let line = &cart.lines()[0];
        assert!(line.add_on);
        assert_eq!(line.unit_price, Money::from_cents(30_000));
    }

    #[test]
    fn test_set_quantity_zero_is_rejected_and_line_unchanged() {
        let mut cart = Cart::new();
        cart.add_line(&wig_install(), &VariantSelection::none(), false, None)
            .unwrap();
        cart.set_quantity(0, 4).unwrap();

        assert_eq!(
            cart.set_quantity(0, 0),
            Err(CheckoutError::InvalidQuantity)
        );
        assert_eq!(cart.lines()[0].quantity(), 4);
    }

    #[test]
    fn test_set_quantity_out_of_range() {
        let mut cart = Cart::new();
        assert_eq!(
            cart.set_quantity(0, 2),
            Err(CheckoutError::LineOutOfRange { index: 0, len: 0 })
        );
    }

    #[test]
    fn test_remove_line_preserves_order() {
        let mut cart = Cart::new();
        cart.add_line(&wig_install(), &VariantSelection::none(), false, None)
            .unwrap();
        cart.add_line(&braids(), &small_medium(), false, None).unwrap();
        cart.add_line(&wig_install(), &VariantSelection::none(), false, None)
            .unwrap();

        let removed = cart.remove_line(1).unwrap();
        assert_eq!(removed.name, "Knotless Braids");
        assert_eq!(cart.len(), 2);
        assert_eq!(cart.lines()[0].name, "Wig Installation");
        assert_eq!(cart.lines()[1].name, "Wig Installation");
    }

    #[test]
    fn test_remove_line_out_of_range() {
        let mut cart = Cart::new();
        assert_eq!(
            cart.remove_line(5).unwrap_err(),
            CheckoutError::LineOutOfRange { index: 5, len: 0 }
        );
    }

    #[test]
    fn test_total_sums_line_totals() {
        let mut cart = Cart::new();
        cart.add_line(&wig_install(), &VariantSelection::none(), false, None)
            .unwrap();
        cart.add_line(&braids(), &small_medium(), false, None).unwrap();
        cart.set_quantity(1, 2).unwrap();

        // 150.00 + 250.00 x 2
        assert_eq!(cart.total(), Money::from_cents(65_000));
    }

    #[test]
    fn test_empty_cart_total_is_exactly_zero() {
        assert_eq!(Cart::new().total(), Money::ZERO);
    }

    #[test]
    fn test_clear() {
        let mut cart = Cart::new();
        cart.add_line(&wig_install(), &VariantSelection::none(), false, None)
            .unwrap();
        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.total(), Money::ZERO);
    }
}
