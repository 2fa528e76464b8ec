//! Listing records and their status values.

pub mod types;

pub use types::*;
