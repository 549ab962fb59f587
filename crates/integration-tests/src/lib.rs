//! Integration tests for Spaza.
//!
//! The checkout engine is all in-memory, so these tests need no external
//! services: each one drives a [`spaza_storefront::CheckoutSession`]
//! through the same sequence of discrete actions a UI would issue, then
//! asserts on the order message and `wa.me` link that come out.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p spaza-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `booking_flow` - The braiding-salon storefront, end to end
//! - `retail_order` - The fragrance-shop storefront, end to end
