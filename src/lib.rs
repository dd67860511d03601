//! stdkit - Pure value-transform functions for an expression evaluator
//!
//! This crate re-exports all layers of the stdkit system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 1: stdkit_stdlib     — range, first, chomp, is_upcase, function registry
//! Layer 0: stdkit_foundation — Core types (Value, Type, Arity, Error)
//! ```

pub use stdkit_foundation as foundation;
pub use stdkit_stdlib as stdlib;
