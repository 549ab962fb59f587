//! Checkout error taxonomy.
//!
//! Every error here is raised synchronously at the point of a user action
//! and carries its user-facing notice text as its `Display` output. None
//! of them propagate as panics, and none have a retry path - there is no
//! I/O in the core flow that can transiently fail.

use thiserror::Error;

use spaza_core::{MissingSelection, ProductId};

use crate::contact::ContactField;

/// Errors raised by cart and checkout operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CheckoutError {
    /// A product with a non-empty axis was added without a label chosen.
    /// The add is blocked and the cart is unchanged.
    #[error(transparent)]
    MissingVariantSelection(#[from] MissingSelection),

    /// A quantity below 1 was requested. The line is left unchanged -
    /// never clamped, never deleted.
    #[error("quantity must be at least 1")]
    InvalidQuantity,

    /// A line index beyond the end of the cart.
    #[error("no cart line at position {index} (cart has {len})")]
    LineOutOfRange {
        /// The requested 0-based index.
        index: usize,
        /// Current number of lines.
        len: usize,
    },

    /// The cart cannot be edited while contact details are being collected;
    /// go back to shopping first.
    #[error("the cart cannot be edited during checkout")]
    CartFrozen,

    /// An order was submitted before checkout was started.
    #[error("checkout has not been started")]
    NotInCheckout,

    /// Checkout was attempted with zero lines. No state transition occurs.
    #[error("your cart is empty")]
    EmptyCartSubmission,

    /// Required contact fields are blank. The fields are listed in a fixed
    /// priority order: name, then phone/email, then address or date/time.
    #[error("missing required details: {}", list_fields(.0))]
    IncompleteContact(Vec<ContactField>),

    /// The requested product is not in this storefront's catalog.
    #[error("unknown product: {0}")]
    UnknownProduct(ProductId),
}

fn list_fields(fields: &[ContactField]) -> String {
    fields
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
