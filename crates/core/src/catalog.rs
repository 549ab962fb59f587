//! The product catalog: what a storefront sells and how it is priced.
//!
//! A [`Catalog`] is a read-only collaborator supplied at startup. The core
//! never mutates it; later edits to a catalog do not retroactively change
//! cart lines, because lines capture product data by value at add time.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::selection::AxisSlot;
use crate::types::{Money, ProductId, RecipientHandle};

/// A product category tag.
///
/// Categories carry no behavior of their own; they exist for filtering and
/// for deciding add-on surcharge eligibility (see [`AddOnPolicy`]).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Category(String);

impl Category {
    /// Create a category tag.
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    /// Returns the tag as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Category {
    fn from(tag: &str) -> Self {
        Self::new(tag)
    }
}

/// How a product's unit price depends on its variant axes.
///
/// Exactly one shape applies per product, which makes the resolution order
/// a closed match instead of a chain of optional lookups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PriceTable {
    /// The base price applies to every variant.
    #[default]
    Flat,
    /// Price varies by the secondary-axis label alone
    /// (e.g. cornrows: "Free hand" vs "Styled").
    ByStyle(BTreeMap<String, Money>),
    /// Price varies jointly: primary-axis label -> secondary-axis label
    /// (e.g. braid size x length).
    Matrix(BTreeMap<String, BTreeMap<String, Money>>),
}

/// A catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Stable identifier, never reused.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Display description.
    #[serde(default)]
    pub description: String,
    /// Category tag, used for add-on eligibility and filtering.
    pub category: Category,
    /// Fallback price when no table entry matches the selection.
    pub base_price: Money,
    /// Ordered labels for the primary axis (scent, or braid size).
    /// Empty when the product has no primary choice.
    #[serde(default)]
    pub primary_axis: Vec<String>,
    /// Ordered labels for the secondary axis (bottle size, or length/style).
    /// Empty when the product has no secondary choice.
    #[serde(default)]
    pub secondary_axis: Vec<String>,
    /// Variant price table. Defaults to [`PriceTable::Flat`].
    #[serde(default)]
    pub pricing: PriceTable,
    /// Whether the product is shown in the featured section.
    #[serde(default)]
    pub featured: bool,
}

/// An optional extra service with a fixed surcharge, limited to a closed
/// set of categories (e.g. a hair wash for braids and cornrows).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddOnPolicy {
    /// Display label for the add-on (e.g. "Hair Wash").
    pub label: String,
    /// Fixed amount added to the resolved unit price.
    pub surcharge: Money,
    /// Categories the add-on can be attached to.
    pub categories: Vec<Category>,
}

impl AddOnPolicy {
    /// Whether the add-on can be attached to a product of this category.
    #[must_use]
    pub fn applies_to(&self, category: &Category) -> bool {
        self.categories.contains(category)
    }
}

/// Which order-message shape a storefront uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderProfile {
    /// Physical goods delivered to an address (the fragrance shop).
    Retail,
    /// Services booked for a date and time (the braiding salon).
    Booking,
}

impl OrderProfile {
    /// Display label for the primary axis in order messages.
    #[must_use]
    pub const fn primary_label(self) -> &'static str {
        match self {
            Self::Retail => "Scent",
            Self::Booking => "Size",
        }
    }

    /// Display label for the secondary axis in order messages.
    #[must_use]
    pub const fn secondary_label(self) -> &'static str {
        match self {
            Self::Retail => "Size",
            Self::Booking => "Length/Style",
        }
    }
}

/// Errors found when validating a catalog.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// Two products share an id.
    #[error("duplicate product id {id}")]
    DuplicateProductId {
        /// The repeated id.
        id: ProductId,
    },
    /// A price table references a label missing from the product's axes.
    #[error("product {product}: price table references unknown {axis} label {label:?}")]
    UnknownTableLabel {
        /// The offending product.
        product: ProductId,
        /// Which axis the label was looked up on.
        axis: AxisSlot,
        /// The label that is not in the axis.
        label: String,
    },
}

/// A storefront's full catalog plus its order-channel identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    /// Storefront display name (appears in retail order headers).
    pub store_name: String,
    /// Order-message shape.
    pub profile: OrderProfile,
    /// `wa.me` handle orders are addressed to.
    pub recipient: RecipientHandle,
    /// Optional add-on surcharge policy.
    #[serde(default)]
    pub add_on: Option<AddOnPolicy>,
    /// Products in display order.
    pub products: Vec<Product>,
}

impl Catalog {
    /// Look up a product by id.
    #[must_use]
    pub fn find(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Products flagged for the featured section, in catalog order.
    pub fn featured(&self) -> impl Iterator<Item = &Product> {
        self.products.iter().filter(|p| p.featured)
    }

    /// Check catalog invariants: unique ids, and price tables that only
    /// reference labels present on the product's axes.
    ///
    /// # Errors
    ///
    /// Returns the first violation found, in catalog order.
    pub fn validate(&self) -> Result<(), CatalogError> {
        let mut seen = std::collections::BTreeSet::new();
        for product in &self.products {
            if !seen.insert(product.id) {
                return Err(CatalogError::DuplicateProductId { id: product.id });
            }
            validate_table(product)?;
        }
        Ok(())
    }
}

fn validate_table(product: &Product) -> Result<(), CatalogError> {
    let unknown = |axis: AxisSlot, label: &String| CatalogError::UnknownTableLabel {
        product: product.id,
        axis,
        label: label.clone(),
    };

    match &product.pricing {
        PriceTable::Flat => Ok(()),
        PriceTable::ByStyle(table) => {
            for label in table.keys() {
                if !product.secondary_axis.contains(label) {
                    return Err(unknown(AxisSlot::Secondary, label));
                }
            }
            Ok(())
        }
        PriceTable::Matrix(table) => {
            for (primary, row) in table {
                if !product.primary_axis.contains(primary) {
                    return Err(unknown(AxisSlot::Primary, primary));
                }
                for secondary in row.keys() {
                    if !product.secondary_axis.contains(secondary) {
                        return Err(unknown(AxisSlot::Secondary, secondary));
                    }
                }
            }
            Ok(())
        }
    }
}
