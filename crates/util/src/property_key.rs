use serde_json::Value;

/// Convert a JSON value to the string it becomes when used as an object key.
///
/// Mirrors JavaScript's `String(value)`: whole floats drop their fraction,
/// arrays join their elements with `,` and objects become `[object Object]`.
///
/// # Examples
///
/// ```
/// use record_kit_util::property_key::as_property_key;
/// use serde_json::json;
///
/// assert_eq!(as_property_key(&json!("a")), "a");
/// assert_eq!(as_property_key(&json!(2.0)), "2");
/// assert_eq!(as_property_key(&json!([1, "x"])), "1,x");
/// ```
pub fn as_property_key(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => match n.as_f64() {
            Some(f) if n.is_f64() && f == 0.0 => "0".to_string(),
            Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < 1e21 => format!("{f:.0}"),
            _ => n.to_string(),
        },
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => as_property_key(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}
