//! Variant axis choices and their resolution against a product.
//!
//! "No explicit choice" and "take the first option" are distinct, named
//! states. A confirm action in a UI maps to [`AxisChoice::FirstOption`]
//! when it intends the default, and stays [`AxisChoice::Unset`] when the
//! user never touched the axis; only the latter is a validation error on
//! a product whose axis actually offers labels.

use serde::{Deserialize, Serialize};

use crate::catalog::Product;

/// Which of a product's two axes is being referred to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AxisSlot {
    /// Scent (retail) or braid size (booking).
    Primary,
    /// Bottle size (retail) or length/style (booking).
    Secondary,
}

impl core::fmt::Display for AxisSlot {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Primary => write!(f, "primary"),
            Self::Secondary => write!(f, "secondary"),
        }
    }
}

/// A required axis label was never chosen.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("no {axis} option was chosen")]
pub struct MissingSelection {
    /// The axis that was left unset.
    pub axis: AxisSlot,
}

/// The state of one axis in a variant selection.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AxisChoice {
    /// The user made no choice at all.
    #[default]
    Unset,
    /// The user accepted the default: the first label the axis offers.
    FirstOption,
    /// The user picked a specific label.
    Picked(String),
}

impl AxisChoice {
    /// Convenience constructor for [`AxisChoice::Picked`].
    pub fn picked(label: impl Into<String>) -> Self {
        Self::Picked(label.into())
    }

    fn resolve(&self, slot: AxisSlot, labels: &[String]) -> Result<Option<String>, MissingSelection> {
        if labels.is_empty() {
            // Nothing to choose on this axis; any state resolves to no label.
            return Ok(None);
        }
        match self {
            Self::Unset => Err(MissingSelection { axis: slot }),
            Self::FirstOption => Ok(labels.first().cloned()),
            Self::Picked(label) => Ok(Some(label.clone())),
        }
    }
}

/// The user's choices for both axes of one product.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct VariantSelection {
    /// Choice on the primary axis.
    pub primary: AxisChoice,
    /// Choice on the secondary axis.
    pub secondary: AxisChoice,
}

impl VariantSelection {
    /// A selection with both axes unset. Valid only for products with no
    /// variant axes.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            primary: AxisChoice::Unset,
            secondary: AxisChoice::Unset,
        }
    }

    /// Resolve the selection against a product's axis lists.
    ///
    /// A `Picked` label is taken verbatim even when it is not one of the
    /// product's labels; price resolution then falls through to the base
    /// price rather than failing.
    ///
    /// # Errors
    ///
    /// Returns [`MissingSelection`] when an axis offers labels but the
    /// choice is [`AxisChoice::Unset`]. The primary axis is reported first.
    pub fn resolve(&self, product: &Product) -> Result<ResolvedVariant, MissingSelection> {
        Ok(ResolvedVariant {
            primary: self.primary.resolve(AxisSlot::Primary, &product.primary_axis)?,
            secondary: self
                .secondary
                .resolve(AxisSlot::Secondary, &product.secondary_axis)?,
        })
    }
}

/// The concrete labels a selection resolved to. `None` means the product
/// has no labels on that axis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedVariant {
    /// Resolved primary-axis label.
    pub primary: Option<String>,
    /// Resolved secondary-axis label.
    pub secondary: Option<String>,
}
