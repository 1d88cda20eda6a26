//! Model-name stripping for roles, types and enumerated constants.
//!
//! MIVOT keys and a few values are qualified with the model they come from,
//! e.g. `mango:EpochPosition.longitude`. Instance fields are named after the
//! unqualified part only.

use serde_json::Value;
use std::borrow::Cow;

/// Removes the model name before the first colon of `token`.
///
/// - Tokens without a colon are returned unchanged.
/// - Otherwise, when `role_instance` is false and the remainder holds a dot,
///   only the segment after the last dot is kept (`a:b.c` -> `c`).
/// - In every other case the remainder is kept with its `:` and `.`
///   separators replaced by `_` (`a:b.c` -> `b_c` for role instances).
///
/// # Example
///
/// ```
/// use mivot_util::remove_model_name;
///
/// assert_eq!(remove_model_name("model:Class.attr", false), "attr");
/// assert_eq!(remove_model_name("model:Class.attr", true), "Class_attr");
/// assert_eq!(remove_model_name("plain", true), "plain");
/// ```
pub fn remove_model_name(token: &str, role_instance: bool) -> Cow<'_, str> {
    let Some(colon) = token.find(':') else {
        return Cow::Borrowed(token);
    };
    let rest = &token[colon + 1..];
    if !role_instance {
        if let Some(dot) = rest.rfind('.') {
            return Cow::Borrowed(&rest[dot + 1..]);
        }
    }
    if rest.contains([':', '.']) {
        Cow::Owned(rest.replace([':', '.'], "_"))
    } else {
        Cow::Borrowed(rest)
    }
}

/// Name of a simple key: the trailing segment of a qualified role.
pub fn normalize(token: &str) -> Cow<'_, str> {
    remove_model_name(token, false)
}

/// Name of a key holding an instance of instances: the qualifying type is
/// kept and flattened with underscores.
pub fn normalize_role(token: &str) -> Cow<'_, str> {
    remove_model_name(token, true)
}

/// Normalizes string values (namespaced identifiers such as enumerated
/// constants); any other JSON value is returned as is.
pub fn normalize_value(value: &Value) -> Value {
    match value {
        Value::String(s) => Value::String(normalize(s).into_owned()),
        other => other.clone(),
    }
}
