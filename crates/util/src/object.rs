use serde_json::{Map, Value};

/// A single record: a JSON object keyed by field name.
pub type Record = Map<String, Value>;

fn has_key<S: AsRef<str>>(keys: &[S], key: &str) -> bool {
    keys.iter().any(|k| k.as_ref() == key)
}

/// Return a copy of `record` holding only the listed fields.
///
/// Fields listed in `keys` but absent from `record` are ignored.
///
/// # Examples
///
/// ```
/// use record_kit_util::object::keep_keys;
/// use serde_json::json;
///
/// let record = json!({"id": 1, "name": "root", "pid": 0});
/// let kept = keep_keys(record.as_object().unwrap(), &["id", "name"]);
///
/// assert_eq!(serde_json::Value::Object(kept), json!({"id": 1, "name": "root"}));
/// ```
pub fn keep_keys<S: AsRef<str>>(record: &Record, keys: &[S]) -> Record {
    record
        .iter()
        .filter(|(key, _)| has_key(keys, key))
        .map(|(key, val)| (key.clone(), val.clone()))
        .collect()
}

/// Return a copy of `record` without the listed fields.
///
/// # Examples
///
/// ```
/// use record_kit_util::object::remove_keys;
/// use serde_json::json;
///
/// let record = json!({"id": 1, "children": []});
/// let stripped = remove_keys(record.as_object().unwrap(), &["children"]);
///
/// assert_eq!(serde_json::Value::Object(stripped), json!({"id": 1}));
/// ```
pub fn remove_keys<S: AsRef<str>>(record: &Record, keys: &[S]) -> Record {
    record
        .iter()
        .filter(|(key, _)| !has_key(keys, key))
        .map(|(key, val)| (key.clone(), val.clone()))
        .collect()
}

/// [`keep_keys`] over a `serde_json::Value`.
/// Non-object values have no fields and come back as an empty object.
pub fn keep_keys_value<S: AsRef<str>>(value: &Value, keys: &[S]) -> Value {
    match value {
        Value::Object(record) => Value::Object(keep_keys(record, keys)),
        _ => Value::Object(Map::new()),
    }
}

/// [`remove_keys`] over a `serde_json::Value`.
/// Non-object values are returned unchanged.
pub fn remove_keys_value<S: AsRef<str>>(value: &Value, keys: &[S]) -> Value {
    match value {
        Value::Object(record) => Value::Object(remove_keys(record, keys)),
        other => other.clone(),
    }
}

/// Rename fields of `record` according to `rules` (`(from, to)` pairs).
///
/// Fields without a rule keep their name. When two fields end up with the same
/// name, the one visited last wins.
///
/// # Examples
///
/// ```
/// use record_kit_util::object::replace_keys;
/// use serde_json::json;
///
/// let record = json!({"parentId": 3, "label": "x"});
/// let renamed = replace_keys(record.as_object().unwrap(), &[("parentId", "pid")]);
///
/// assert_eq!(serde_json::Value::Object(renamed), json!({"pid": 3, "label": "x"}));
/// ```
pub fn replace_keys<A, B>(record: &Record, rules: &[(A, B)]) -> Record
where
    A: AsRef<str>,
    B: AsRef<str>,
{
    let mut result = Map::new();
    for (key, val) in record {
        let target = rules
            .iter()
            .find(|(from, _)| from.as_ref() == key.as_str())
            .map(|(_, to)| to.as_ref().to_string())
            .unwrap_or_else(|| key.clone());
        result.insert(target, val.clone());
    }
    result
}

/// Shallow-merge `sources` into `target`, later sources overwriting earlier ones.
pub fn extend(target: &mut Record, sources: &[&Record]) {
    for source in sources {
        for (key, val) in source.iter() {
            target.insert(key.clone(), val.clone());
        }
    }
}
