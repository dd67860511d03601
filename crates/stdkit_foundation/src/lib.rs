//! Core types shared by every stdkit function.
//!
//! - [`Value`] - arguments and results exchanged with the host, with
//!   [`Array`] and [`Map`] as persistent `im` collections
//! - [`Type`] and [`Arity`] - what a function accepts
//! - [`Error`] - parameter errors tagged with the raising function

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod types;
pub mod value;

pub use error::{CallTrace, Error, ErrorKind};
pub use types::{Arity, Type};
pub use value::{Array, Map, Value};

/// Result type alias using the stdkit [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
