//! Spaza Storefront - the checkout engine.
//!
//! Everything a storefront UI needs behind its buttons: an ordered cart
//! with frozen-at-add-time unit prices, a customer contact form with
//! field-level validation, a three-stage checkout session, and the order
//! message / `wa.me` deep link the whole flow exists to produce.
//!
//! The UI layer (web, native, terminal) stays outside this crate; it calls
//! in on discrete user actions and renders whatever comes back. Nothing
//! here blocks, and nothing here talks to the network - the WhatsApp
//! handoff is a URL the caller opens, fire-and-forget.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod config;
pub mod contact;
pub mod error;
pub mod order;
pub mod whatsapp;

pub use cart::{Cart, CartLine};
pub use catalog::{CatalogLoadError, load_catalog, samples};
pub use checkout::{CheckoutSession, OrderHandoff, SessionId, Stage};
pub use config::{ConfigError, SampleCatalog, StorefrontConfig};
pub use contact::{ContactField, ContactForm, ContactMethod, Fulfilment};
pub use error::CheckoutError;
pub use order::compose_message;
pub use whatsapp::order_link;
