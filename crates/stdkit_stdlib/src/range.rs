//! Range expansion: `range(start, stop [, step])`.
//!
//! Expands two endpoints into the ordered list of every value between them.
//! Endpoints are classified into one of two modes:
//!
//! - **Numeric**: both contain an integer run (`-?[0-9]+`). Values step from
//!   the start integer to the stop integer and are rendered back into the
//!   start text, zero-padded to the longest `0`-led run of either endpoint.
//!   `range("abc1", "abc010")` yields `abc001` through `abc010`.
//! - **Alphabetic**: neither contains a digit. Values follow string
//!   succession (`a`, `b`, ... `z`, `aa`, ...) from start to stop.
//!
//! Every result element is a string, so `range(1, 3)` yields `["1", "2", "3"]`.
//!
//! Succession stops after `stop`, or once the next string would be longer
//! than `stop`. A stop that succession never produces (`range("a", "Zz")`:
//! lowercase never becomes uppercase) therefore yields every string up to its
//! length, ending past it at `"zz"`.
//!
//! Floats are rendered in plain decimal (`1.0`, never `1e20`) before the
//! integer run is searched for; NaN and infinities are rejected. A step may be
//! an integer or a string of digits with an optional `+` or `-` sign.
//!
//! Negative endpoints combined with zero-padding are not normalized: a signed
//! run such as `-05` requests no padding, and padding widths count the sign of
//! rendered values. `range("-05", "010")` therefore pads `-5` to `-05` but
//! `5` to `005`.

mod bound;
mod successor;

pub use bound::{Bound, NumericPattern, Role, parse_step};
pub use successor::{Successors, succession_order, successor};

use std::borrow::Cow;

use stdkit_foundation::{Arity, Array, Error, Result, Value};

use crate::args::{check_arity, spread_single_sequence};
use crate::config::StdlibConfig;

/// Name the function is registered under.
pub const NAME: &str = "range";

/// Accepted argument counts.
pub const ARITY: Arity = Arity::Range(2, 3);

/// A validated, classified range call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RangeRequest {
    /// Both endpoints contain an integer run.
    Numeric {
        /// The start operand; generated values are rendered into it.
        pattern: NumericPattern,
        /// Inclusive upper bound.
        stop: i64,
        /// Zero-padding width, or 0 for none.
        width: usize,
        /// Stride between generated values.
        step: usize,
    },
    /// Neither endpoint contains a digit.
    Alphabetic {
        /// First element of the succession.
        start: String,
        /// Last element of the succession.
        stop: String,
        /// Every `step`-th element is kept.
        step: usize,
    },
}

impl RangeRequest {
    /// Validates and classifies raw call arguments.
    ///
    /// # Errors
    ///
    /// Returns a parameter error for a wrong argument count, an operand that
    /// is not a number or non-empty string, a step that is not a positive
    /// integer, a numeric start above its stop, or endpoints of different modes.
    pub fn from_args(args: &[Value], config: &StdlibConfig) -> Result<Self> {
        let args: Cow<'_, [Value]> = if config.spread_single_sequence {
            spread_single_sequence(args)
        } else {
            Cow::Borrowed(args)
        };
        check_arity(NAME, ARITY, &args)?;

        let start = Bound::from_value(&args[0], Role::Start)?;
        let stop = Bound::from_value(&args[1], Role::Stop)?;
        let step = parse_step(args.get(2))?;

        let request = Self::classify(start, stop, step)?;
        log::debug!("{NAME}: classified as {request:?}");
        Ok(request)
    }

    /// Builds a request from already-coerced endpoints.
    ///
    /// # Errors
    ///
    /// Returns a range violation when the modes differ or a numeric start
    /// is greater than its stop.
    pub fn classify(start: Bound, stop: Bound, step: usize) -> Result<Self> {
        match (start, stop) {
            (Bound::Numeric(start), Bound::Numeric(stop)) => {
                if start.value() > stop.value() {
                    return Err(Error::range_violation(format!(
                        "start ({}) must not be greater than stop ({})",
                        start.value(),
                        stop.value()
                    ))
                    .in_function(NAME));
                }
                let width = start.padding_width().max(stop.padding_width());
                Ok(Self::Numeric {
                    stop: stop.value(),
                    pattern: start,
                    width,
                    step,
                })
            }
            (Bound::Alphabetic(start), Bound::Alphabetic(stop)) => {
                Ok(Self::Alphabetic { start, stop, step })
            }
            (start, stop) => Err(Error::range_violation(format!(
                "cannot build a range from {} to {}: one endpoint is numeric and the other is not",
                describe(&start),
                describe(&stop)
            ))
            .in_function(NAME)),
        }
    }

    /// Generates the range elements.
    ///
    /// # Errors
    ///
    /// Returns a range violation if the range would exceed
    /// [`StdlibConfig::max_range_len`]. Numeric ranges are counted before any
    /// element is generated; alphabetic ranges fail once the walk reaches the
    /// limit, whatever the step.
    pub fn expand(&self, config: &StdlibConfig) -> Result<Vec<String>> {
        let limit = config.max_range_len;
        match self {
            Self::Numeric {
                pattern,
                stop,
                width,
                step,
            } => {
                let start = pattern.value();
                let span = i128::from(*stop) - i128::from(start);
                let count = span / i128::try_from(*step).unwrap_or(i128::MAX) + 1;
                if count > i128::try_from(limit).unwrap_or(i128::MAX) {
                    return Err(too_long(limit));
                }
                Ok((start..=*stop)
                    .step_by(*step)
                    .map(|n| pattern.render(n, *width))
                    .collect())
            }
            Self::Alphabetic { start, stop, step } => {
                let mut items = Vec::new();
                for (walked, item) in alphabetic(start, stop).enumerate() {
                    if walked >= limit {
                        return Err(walk_too_long(limit));
                    }
                    if walked % step == 0 {
                        items.push(item);
                    }
                }
                Ok(items)
            }
        }
    }

    /// Stride between kept elements.
    #[must_use]
    pub const fn step(&self) -> usize {
        match self {
            Self::Numeric { step, .. } | Self::Alphabetic { step, .. } => *step,
        }
    }
}

/// Native function: `range(start, stop [, step])`.
///
/// # Errors
///
/// See [`RangeRequest::from_args`] and [`RangeRequest::expand`].
pub fn native_range(config: &StdlibConfig, args: &[Value]) -> Result<Value> {
    let items = RangeRequest::from_args(args, config)?.expand(config)?;
    Ok(Value::Vec(items.into_iter().map(Value::from).collect::<Array>()))
}

/// Single ASCII characters walk the code-point range; anything else follows
/// string succession.
fn alphabetic(start: &str, stop: &str) -> Box<dyn Iterator<Item = String>> {
    match (single_ascii(start), single_ascii(stop)) {
        (Some(first), Some(last)) => {
            Box::new((first..=last).map(|b| char::from(b).to_string()))
        }
        _ => Box::new(Successors::new(start, stop)),
    }
}

fn single_ascii(s: &str) -> Option<u8> {
    match s.as_bytes() {
        [b] if b.is_ascii() => Some(*b),
        _ => None,
    }
}

fn describe(bound: &Bound) -> String {
    match bound {
        Bound::Numeric(pattern) => format!("{:?}", pattern.text()),
        Bound::Alphabetic(text) => format!("{text:?}"),
    }
}

fn too_long(limit: usize) -> Error {
    Error::range_violation(format!("range would produce more than {limit} elements"))
        .in_function(NAME)
}

fn walk_too_long(limit: usize) -> Error {
    Error::range_violation(format!(
        "alphabetic range would walk more than {limit} strings"
    ))
    .in_function(NAME)
}
