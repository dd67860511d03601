//! Errors raised by stdkit functions.
//!
//! Everything a function can say about bad arguments is a parameter error
//! (see [`ErrorKind::is_parameter_error`]); only the registry's unknown-name
//! failure is not.

use std::fmt;

use thiserror::Error;

use crate::types::{Arity, Type};

/// A failed call.
#[derive(Debug, Error)]
pub struct Error {
    /// What went wrong.
    pub kind: ErrorKind,
    /// The function that raised it, once known.
    pub function: Option<&'static str>,
    /// Calls the error passed through on its way out, innermost first.
    pub trace: CallTrace,
}

impl Error {
    fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            function: None,
            trace: CallTrace::default(),
        }
    }

    /// Names the function that raised this error.
    #[must_use]
    pub fn in_function(mut self, name: &'static str) -> Self {
        self.function = Some(name);
        self
    }

    /// Records that the error passed out of a call to `frame`.
    #[must_use]
    pub fn with_frame(mut self, frame: impl Into<String>) -> Self {
        self.trace.frames.push(frame.into());
        self
    }

    /// Wrong argument count.
    #[must_use]
    pub fn arity_mismatch(expected: Arity, actual: usize) -> Self {
        Self::new(ErrorKind::ArityMismatch { expected, actual })
    }

    /// Argument of the wrong kind.
    #[must_use]
    pub fn type_mismatch(argument: &'static str, expected: Type, actual: Type) -> Self {
        Self::new(ErrorKind::TypeMismatch {
            argument,
            expected,
            actual,
        })
    }

    /// Argument of an accepted kind whose contents are unusable.
    #[must_use]
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidArgument(message.into()))
    }

    /// Arguments that cannot produce a result.
    #[must_use]
    pub fn range_violation(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::RangeViolation(message.into()))
    }

    /// No function under this name.
    #[must_use]
    pub fn undefined_function(name: impl Into<String>) -> Self {
        Self::new(ErrorKind::UndefinedFunction(name.into()))
    }

    /// See [`ErrorKind::is_parameter_error`].
    #[must_use]
    pub const fn is_parameter_error(&self) -> bool {
        self.kind.is_parameter_error()
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.function {
            Some(function) => write!(f, "{function}(): {}", self.kind),
            None => write!(f, "{}", self.kind),
        }
    }
}

/// Why a call failed.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// Wrong number of arguments.
    #[error("wrong number of arguments: expected {expected}, got {actual}")]
    ArityMismatch {
        /// Accepted counts.
        expected: Arity,
        /// Count received.
        actual: usize,
    },

    /// An argument of the wrong kind.
    #[error("{argument} must be {expected}, got {actual}")]
    TypeMismatch {
        /// Which argument, e.g. `start` or `value`.
        argument: &'static str,
        /// Kind the function accepts.
        expected: Type,
        /// Kind it received.
        actual: Type,
    },

    /// Right kind, unusable contents.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Arguments that do not describe a producible result.
    #[error("{0}")]
    RangeViolation(String),

    /// Unknown function name.
    #[error("undefined function: {0}")]
    UndefinedFunction(String),
}

impl ErrorKind {
    /// True for the four kinds that together report a bad call.
    #[must_use]
    pub const fn is_parameter_error(&self) -> bool {
        !matches!(self, Self::UndefinedFunction(_))
    }
}

/// Function names an error propagated through.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CallTrace {
    /// Innermost call first.
    pub frames: Vec<String>,
}

impl fmt::Display for CallTrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, frame) in self.frames.iter().enumerate() {
            if i > 0 {
                f.write_str(" <- ")?;
            }
            write!(f, "{frame}()")?;
        }
        Ok(())
    }
}
