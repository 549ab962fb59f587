//! CLI subcommand implementations.

// Command output goes to stdout so it can be piped.
#![allow(clippy::print_stdout)]

pub mod catalog;
pub mod order;
pub mod price;
