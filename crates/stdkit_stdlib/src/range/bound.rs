//! Coercion of raw `range` operands into typed bounds and steps.

use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;
use stdkit_foundation::{Error, Result, Type, Value};

use super::NAME;

/// First optionally-signed ASCII digit run in an operand.
static INTEGER_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"-?[0-9]+").expect("integer run pattern is valid"));

/// A whole step string: optional sign, then digits only.
static STEP_LITERAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[+-]?[0-9]+$").expect("step literal pattern is valid"));

/// Which end of the range an operand describes, for error messages.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    /// The first operand.
    Start,
    /// The second operand.
    Stop,
}

impl Role {
    const fn as_str(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Stop => "stop",
        }
    }
}

/// An operand text whose first integer run drives numeric generation.
///
/// Everything around the run (e.g. the `abc` in `abc010`) is kept verbatim
/// when values are rendered back into the pattern.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NumericPattern {
    text: String,
    span: Range<usize>,
    value: i64,
}

impl NumericPattern {
    /// Finds the first integer run in `text`, or `None` if it has no digits.
    ///
    /// Fails if the run does not fit in an `i64`.
    pub fn parse(text: &str, role: Role) -> Result<Option<Self>> {
        let Some(found) = INTEGER_RUN.find(text) else {
            return Ok(None);
        };
        let value = found.as_str().parse::<i64>().map_err(|_| {
            Error::range_violation(format!(
                "{} value {} is out of range",
                role.as_str(),
                found.as_str()
            ))
            .in_function(NAME)
        })?;
        Ok(Some(Self {
            text: text.to_string(),
            span: found.range(),
            value,
        }))
    }

    /// The operand text this pattern was parsed from.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The matched integer run, sign included.
    #[must_use]
    pub fn digits(&self) -> &str {
        &self.text[self.span.clone()]
    }

    /// The integer value of the run.
    #[must_use]
    pub const fn value(&self) -> i64 {
        self.value
    }

    /// Width this operand asks generated values to be padded to, or 0.
    ///
    /// Only a run that starts with a literal `0` requests padding, so a signed
    /// run like `-05` never does.
    #[must_use]
    pub fn padding_width(&self) -> usize {
        let digits = self.digits();
        if digits.starts_with('0') {
            digits.len()
        } else {
            0
        }
    }

    /// Substitutes `n`, zero-padded to `width`, for the integer run.
    ///
    /// Padding is sign-aware: `-5` at width 3 renders as `-05`.
    #[must_use]
    pub fn render(&self, n: i64, width: usize) -> String {
        let mut out = String::with_capacity(self.text.len() + width);
        out.push_str(&self.text[..self.span.start]);
        out.push_str(&format!("{n:0width$}"));
        out.push_str(&self.text[self.span.end..]);
        out
    }
}

/// A `range` operand after coercion.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Bound {
    /// Contains an integer run.
    Numeric(NumericPattern),
    /// Contains no digits at all.
    Alphabetic(String),
}

impl Bound {
    /// Coerces a start or stop argument.
    ///
    /// Numbers are converted to their decimal text first so padding and
    /// pattern handling work the same way for every operand. Floats always
    /// keep a fractional part and never use exponent notation.
    pub fn from_value(value: &Value, role: Role) -> Result<Self> {
        let text = match value {
            Value::Int(n) => n.to_string(),
            Value::Float(n) if n.is_finite() => float_text(*n),
            Value::Float(n) => {
                return Err(Error::invalid_argument(format!(
                    "{} must be a finite number, got {n}",
                    role.as_str()
                ))
                .in_function(NAME));
            }
            Value::String(s) if s.is_empty() => {
                return Err(Error::invalid_argument(format!(
                    "{} must not be an empty string",
                    role.as_str()
                ))
                .in_function(NAME));
            }
            Value::String(s) => s.to_string(),
            other => {
                return Err(
                    Error::type_mismatch(role.as_str(), Type::Scalar, other.value_type())
                        .in_function(NAME),
                );
            }
        };

        match NumericPattern::parse(&text, role)? {
            Some(pattern) => Ok(Self::Numeric(pattern)),
            None => Ok(Self::Alphabetic(text)),
        }
    }
}

/// Coerces the optional step argument into a positive stride.
///
/// A missing or nil step means 1.
pub fn parse_step(value: Option<&Value>) -> Result<usize> {
    let raw = match value {
        None | Some(Value::Nil) => return Ok(1),
        Some(Value::Int(n)) => *n,
        Some(Value::String(s)) if STEP_LITERAL.is_match(s) => s.parse::<i64>().map_err(|_| {
            Error::range_violation(format!("step {s} is out of range")).in_function(NAME)
        })?,
        Some(Value::String(s)) => {
            return Err(Error::invalid_argument(format!(
                "step must be a string of digits, got {s:?}"
            ))
            .in_function(NAME));
        }
        Some(other) => {
            return Err(
                Error::type_mismatch("step", Type::Integer, other.value_type()).in_function(NAME),
            );
        }
    };

    if raw < 0 {
        return Err(
            Error::range_violation(format!("step must not be negative, got {raw}"))
                .in_function(NAME),
        );
    }
    if raw == 0 {
        return Err(Error::range_violation("step must be greater than zero").in_function(NAME));
    }
    usize::try_from(raw)
        .map_err(|_| Error::range_violation(format!("step {raw} is out of range")).in_function(NAME))
}

fn float_text(n: f64) -> String {
    let text = n.to_string();
    if text.contains('.') {
        text
    } else {
        format!("{text}.0")
    }
}
