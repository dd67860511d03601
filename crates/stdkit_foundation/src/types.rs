//! Descriptors used when checking arguments.

use std::fmt;
use std::ops::RangeInclusive;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The kind of a [`Value`](crate::Value), spelled the way the host spells it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Type {
    /// `undef`.
    Undef,
    /// `true` or `false`.
    Boolean,
    /// 64-bit signed integer.
    Integer,
    /// 64-bit float.
    Float,
    /// Any string.
    String,
    /// Ordered sequence of values.
    Array,
    /// Key/value table.
    Hash,
    /// Either a number or a string; only ever expected, never reported as actual.
    Scalar,
}

impl Type {
    const fn name(self) -> &'static str {
        match self {
            Self::Undef => "undef",
            Self::Boolean => "boolean",
            Self::Integer => "integer",
            Self::Float => "float",
            Self::String => "string",
            Self::Array => "array",
            Self::Hash => "hash",
            Self::Scalar => "number or string",
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// How many arguments a function takes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Arity {
    /// Exactly this many.
    Exact(usize),
    /// Any count in `min..=max`.
    Range(usize, usize),
}

impl Arity {
    /// The accepted counts as an inclusive range.
    #[must_use]
    pub const fn bounds(self) -> RangeInclusive<usize> {
        match self {
            Self::Exact(n) => n..=n,
            Self::Range(min, max) => min..=max,
        }
    }

    /// Returns true if a call with `count` arguments is allowed.
    #[must_use]
    pub fn accepts(self, count: usize) -> bool {
        self.bounds().contains(&count)
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact(n) => write!(f, "{n}"),
            Self::Range(min, max) => write!(f, "{min}..{max}"),
        }
    }
}
