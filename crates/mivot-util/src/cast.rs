//! Casting of raw table cells to the type declared by an ATTRIBUTE `dmtype`.

use serde_json::Value;

use crate::error::CastError;
use crate::names::normalize;

/// Cell contents meaning "no value", compared case-insensitively.
const NULL_MARKERS: [&str; 6] = ["notset", "noset", "null", "none", "nan", "--"];

/// Words of a `dmtype` name marking an integer type (`unsignedShort`,
/// `IntegerQuantity`, `ivoa:long`).
const INTEGER_WORDS: [&str; 5] = ["int", "integer", "long", "short", "byte"];

/// All-lowercase spellings of the XML Schema integer types, which have no
/// word boundary to split on.
const INTEGER_TYPES: [&str; 8] = [
    "nonnegativeinteger",
    "nonpositiveinteger",
    "negativeinteger",
    "positiveinteger",
    "unsignedbyte",
    "unsignedshort",
    "unsignedint",
    "unsignedlong",
];

/// Returns true when `raw` stands for a missing value.
///
/// # Example
///
/// ```
/// use mivot_util::is_null_marker;
/// use serde_json::json;
///
/// assert!(is_null_marker(&json!(null)));
/// assert!(is_null_marker(&json!("NaN")));
/// assert!(!is_null_marker(&json!("0")));
/// ```
pub fn is_null_marker(raw: &Value) -> bool {
    match raw {
        Value::Null => true,
        Value::String(s) => NULL_MARKERS.iter().any(|m| s.eq_ignore_ascii_case(m)),
        _ => false,
    }
}

/// Casts `raw` to the type declared by `dmtype`.
///
/// The `dmtype` may be qualified (`ivoa:real`) or not (`real`) and is
/// matched case-insensitively:
///
/// - an empty string is `null` unless the type is a string type,
/// - boolean types yield `true` for `"1"`, `"true"`, `true` and non-zero numbers,
/// - null markers (`null`, `"NaN"`, `"--"`, ...) yield `null`,
/// - `real`, `double` and `float` types yield a float,
/// - integer types yield an integer: names holding an `int`, `integer`,
///   `long`, `short` or `byte` word (`unsignedShort`, `IntegerQuantity`),
///   but not `Point` or `Longitude`,
/// - any other type keeps the raw value.
///
/// # Errors
///
/// Returns [`CastError`] when a numeric type is declared and the raw value
/// cannot be read as such a number.
///
/// # Example
///
/// ```
/// use mivot_util::cast_type_value;
/// use serde_json::json;
///
/// assert_eq!(cast_type_value(&json!("3.5"), "float").unwrap(), json!(3.5));
/// assert_eq!(cast_type_value(&json!("42"), "ivoa:integer").unwrap(), json!(42));
/// assert_eq!(cast_type_value(&json!(""), "ivoa:real").unwrap(), json!(null));
/// assert!(cast_type_value(&json!("abc"), "ivoa:real").is_err());
/// ```
pub fn cast_type_value(raw: &Value, dmtype: &str) -> Result<Value, CastError> {
    let lower = dmtype.to_ascii_lowercase();

    if !lower.contains("string") && raw.as_str() == Some("") {
        return Ok(Value::Null);
    }
    if lower.contains("bool") {
        return Ok(Value::Bool(is_truthy(raw)));
    }
    if is_null_marker(raw) {
        return Ok(Value::Null);
    }
    if lower.contains("real") || lower.contains("double") || lower.contains("float") {
        return to_float(raw, dmtype).map(Value::from);
    }
    if is_integer_type(dmtype) {
        return to_integer(raw, dmtype).map(Value::from);
    }
    Ok(raw.clone())
}

fn is_integer_type(dmtype: &str) -> bool {
    let bare = normalize(dmtype);
    if INTEGER_TYPES.contains(&bare.to_ascii_lowercase().as_str()) {
        return true;
    }
    let found = words(&bare).any(|word| {
        INTEGER_WORDS
            .iter()
            .any(|integer| word.eq_ignore_ascii_case(integer))
    });
    found
}

/// Splits a type name into its words, at camel-case humps and at any
/// non-alphanumeric character: `nonPositiveInteger` gives `non`,
/// `Positive`, `Integer`.
fn words(name: &str) -> impl Iterator<Item = &str> {
    let chars: Vec<(usize, char)> = name.char_indices().collect();
    let mut bounds = Vec::new();
    for (i, &(at, c)) in chars.iter().enumerate() {
        let prev = i.checked_sub(1).map(|p| chars[p].1);
        let next = chars.get(i + 1).map(|&(_, n)| n);
        let hump = c.is_uppercase()
            && prev.is_some_and(|p| {
                p.is_lowercase()
                    || p.is_ascii_digit()
                    || (p.is_uppercase() && next.is_some_and(char::is_lowercase))
            });
        if hump {
            bounds.push(at);
        }
    }
    bounds.push(name.len());

    let mut start = 0;
    bounds
        .into_iter()
        .flat_map(move |end| {
            let segment = &name[start..end];
            start = end;
            segment.split(|c: char| !c.is_alphanumeric())
        })
        .filter(|word| !word.is_empty())
}

fn is_truthy(raw: &Value) -> bool {
    match raw {
        Value::Bool(b) => *b,
        Value::String(s) => s == "1" || s.eq_ignore_ascii_case("true"),
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        _ => false,
    }
}

fn to_float(raw: &Value, dmtype: &str) -> Result<f64, CastError> {
    let parsed = match raw {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed
        .filter(|f| f.is_finite())
        .ok_or_else(|| CastError::InvalidNumber {
        value: raw.to_string(),
        dmtype: dmtype.to_string(),
    })
}

fn to_integer(raw: &Value, dmtype: &str) -> Result<i64, CastError> {
    let parsed = match raw {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().and_then(integral)),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<i64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().and_then(integral))
        }
        _ => None,
    };
    parsed.ok_or_else(|| CastError::InvalidInteger {
        value: raw.to_string(),
        dmtype: dmtype.to_string(),
    })
}

#[allow(clippy::cast_possible_truncation)]
fn integral(f: f64) -> Option<i64> {
    if f.is_finite() && f.fract() == 0.0 && f.abs() < i64::MAX as f64 {
        Some(f as i64)
    } else {
        None
    }
}
