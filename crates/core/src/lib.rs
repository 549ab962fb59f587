//! Spaza Core - Shared domain types.
//!
//! This crate provides the types used across all Spaza components:
//! - `storefront` - Checkout engine (cart, contact form, order handoff)
//! - `cli` - Command-line tools for catalog inspection and order previews
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no file
//! loading, no environment access. This keeps it lightweight and allows it
//! to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, money, and recipients
//! - [`catalog`] - Products, price tables, and the read-only catalog
//! - [`selection`] - Variant axis choices and their resolution rules
//! - [`pricing`] - The unit-price resolver

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod pricing;
pub mod selection;
pub mod types;

pub use catalog::{AddOnPolicy, Catalog, CatalogError, Category, OrderProfile, PriceTable, Product};
pub use pricing::resolve_unit_price;
pub use selection::{AxisChoice, AxisSlot, MissingSelection, ResolvedVariant, VariantSelection};
pub use types::*;
