use serde_json::Value;

/// Equality used when matching ids and set elements.
///
/// JSON numbers compare by numeric value, so `1` and `1.0` are equal; other
/// values compare structurally.
pub trait StrictEq {
    fn strict_eq(&self, other: &Self) -> bool;
}

impl StrictEq for Value {
    fn strict_eq(&self, other: &Self) -> bool {
        strict_equal(self, other)
    }
}

impl<T: StrictEq + ?Sized> StrictEq for &T {
    fn strict_eq(&self, other: &Self) -> bool {
        (**self).strict_eq(*other)
    }
}

macro_rules! strict_eq_by_partial_eq {
    ($($ty:ty),*) => {
        $(impl StrictEq for $ty {
            fn strict_eq(&self, other: &Self) -> bool {
                self == other
            }
        })*
    };
}

strict_eq_by_partial_eq!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char, str,
    String
);

/// Whether `a` and `b` are the same JSON value, numbers compared as `f64`.
///
/// # Examples
///
/// ```
/// use record_kit_util::strict_eq::strict_equal;
/// use serde_json::json;
///
/// assert!(strict_equal(&json!(1), &json!(1.0)));
/// assert!(strict_equal(&json!({"id": [2]}), &json!({"id": [2.0]})));
/// assert!(!strict_equal(&json!(1), &json!("1")));
/// ```
pub fn strict_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => match (x.as_f64(), y.as_f64()) {
            (Some(x), Some(y)) => x == y,
            _ => x == y,
        },
        (Value::Array(x), Value::Array(y)) => {
            x.len() == y.len() && x.iter().zip(y).all(|(x, y)| strict_equal(x, y))
        }
        (Value::Object(x), Value::Object(y)) => {
            x.len() == y.len()
                && x.iter()
                    .all(|(key, val)| y.get(key).map_or(false, |other| strict_equal(val, other)))
        }
        _ => a == b,
    }
}

/// Hashable key for `value`; two values get the same key exactly when
/// [`strict_equal`] holds between them.
pub fn strict_key(value: &Value) -> String {
    let mut out = String::new();
    write_key(value, &mut out);
    out
}

fn write_key(value: &Value, out: &mut String) {
    match value {
        Value::Number(n) => match n.as_f64() {
            Some(f) if f == 0.0 => out.push('0'),
            Some(f) => out.push_str(&f.to_string()),
            None => out.push_str(&n.to_string()),
        },
        Value::Array(items) => {
            out.push('[');
            for (index, item) in items.iter().enumerate() {
                if index > 0 {
                    out.push(',');
                }
                write_key(item, out);
            }
            out.push(']');
        }
        Value::Object(fields) => {
            out.push('{');
            for (index, (key, val)) in fields.iter().enumerate() {
                if index > 0 {
                    out.push(',');
                }
                out.push_str(&Value::String(key.clone()).to_string());
                out.push(':');
                write_key(val, out);
            }
            out.push('}');
        }
        other => out.push_str(&other.to_string()),
    }
}
