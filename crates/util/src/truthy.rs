use serde_json::Value;

/// JavaScript truthiness of a JSON value.
///
/// `null`, `false`, `0` (including `-0.0`) and `""` are falsy; everything else,
/// including empty arrays and objects, is truthy.
///
/// # Examples
///
/// ```
/// use record_kit_util::truthy::is_truthy;
/// use serde_json::json;
///
/// assert!(is_truthy(&json!([])));
/// assert!(!is_truthy(&json!(0)));
/// assert!(!is_truthy(&json!("")));
/// ```
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(false, |f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
