//! Argument helpers shared by the builtin functions.

use std::borrow::Cow;

use stdkit_foundation::{Arity, Error, Result, Value};

/// Fails with an arity error unless `args` satisfies `arity`.
pub(crate) fn check_arity(name: &'static str, arity: Arity, args: &[Value]) -> Result<()> {
    if arity.accepts(args.len()) {
        Ok(())
    } else {
        Err(Error::arity_mismatch(arity, args.len()).in_function(name))
    }
}

/// Unwraps a lone sequence argument into a flat positional list.
///
/// Any other argument shape is returned unchanged.
pub(crate) fn spread_single_sequence(args: &[Value]) -> Cow<'_, [Value]> {
    match args {
        [Value::Vec(inner)] => {
            log::trace!("spreading single sequence argument of {} elements", inner.len());
            Cow::Owned(inner.iter().cloned().collect())
        }
        _ => Cow::Borrowed(args),
    }
}

/// Returns the only argument of a one-argument function.
pub(crate) fn single<'a>(name: &'static str, args: &'a [Value]) -> Result<&'a Value> {
    match args {
        [value] => Ok(value),
        _ => Err(Error::arity_mismatch(Arity::Exact(1), args.len()).in_function(name)),
    }
}
