//! Core types for Spaza.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod money;
pub mod recipient;

pub use id::*;
pub use money::Money;
pub use recipient::{RecipientHandle, RecipientHandleError};
