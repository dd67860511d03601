//! Collection functions.

use stdkit_foundation::{Error, Result, Type, Value};

use crate::args::single;

/// Collection: first - returns the first element of an array, or nil when empty
pub fn native_first(args: &[Value]) -> Result<Value> {
    match single("first", args)? {
        Value::Vec(v) => Ok(v.front().cloned().unwrap_or(Value::Nil)),
        other => {
            Err(Error::type_mismatch("value", Type::Array, other.value_type()).in_function("first"))
        }
    }
}
