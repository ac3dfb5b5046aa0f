//! Total lookups into untrusted provider JSON.
//!
//! Every helper takes an optional node and a JSON pointer (RFC 6901) and
//! returns `None` for anything absent, null, or of the wrong type.

use serde_json::{Map, Value};

/// Node at `pointer`, treating JSON null as absent.
pub fn at<'a>(value: Option<&'a Value>, pointer: &str) -> Option<&'a Value> {
    value?.pointer(pointer).filter(|node| !node.is_null())
}

/// Finite number at `pointer`. Numeric strings are accepted.
pub fn number_at(value: Option<&Value>, pointer: &str) -> Option<f64> {
    let number = match at(value, pointer)? {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse::<f64>().ok(),
        _ => None,
    };
    number.filter(|n| n.is_finite())
}

pub fn str_at<'a>(value: Option<&'a Value>, pointer: &str) -> Option<&'a str> {
    at(value, pointer)?.as_str()
}

pub fn array_at<'a>(value: Option<&'a Value>, pointer: &str) -> Option<&'a [Value]> {
    at(value, pointer)?.as_array().map(Vec::as_slice)
}

pub fn object_at<'a>(value: Option<&'a Value>, pointer: &str) -> Option<&'a Map<String, Value>> {
    at(value, pointer)?.as_object()
}
