//! Standard library functions for a host expression evaluator.
//!
//! Every function is a pure transform from already-evaluated arguments to a
//! single value:
//! - `range` - expands numeric, zero-padded pattern, or alphabetic ranges
//! - `first` - first element of an array
//! - `chomp` - trailing line terminator removal
//! - `is_upcase` - case check
//!
//! Functions can be called directly or dispatched by name through a
//! [`FunctionRegistry`]. All failures are parameter errors reported through
//! [`stdkit_foundation::Error`].

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod args;
pub mod collection;
pub mod config;
pub mod range;
pub mod registry;
pub mod string;

pub use collection::native_first;
pub use config::StdlibConfig;
pub use range::{RangeRequest, native_range};
pub use registry::{Builtin, BuiltinFn, FunctionRegistry};
pub use string::{native_chomp, native_is_upcase};
