//! General list helpers: grouping, counting, sampling and conversions.

use crate::error::ArrayError;
use rand::seq::SliceRandom;
use rand::Rng;
use record_kit_util::{as_property_key, is_truthy};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use tracing::warn;

/// Borrow the elements of a JSON array.
pub fn as_arr(value: &Value) -> Result<&Vec<Value>, ArrayError> {
    match value {
        Value::Array(items) => Ok(items),
        _ => Err(ArrayError::NotArray),
    }
}

/// Split `seq` into groups of `size`; the last group may be shorter.
///
/// # Examples
///
/// ```
/// use record_kit_array::list::chunk;
///
/// assert_eq!(chunk(&[1, 2, 3, 4, 5], 2).unwrap(), vec![vec![1, 2], vec![3, 4], vec![5]]);
/// assert!(chunk(&[1], 0).is_err());
/// ```
pub fn chunk<T: Clone>(seq: &[T], size: usize) -> Result<Vec<Vec<T>>, ArrayError> {
    if size == 0 {
        return Err(ArrayError::InvalidChunkSize);
    }
    Ok(seq.chunks(size).map(<[T]>::to_vec).collect())
}

/// Drop falsy values (`null`, `false`, `0`, `""`).
pub fn compact(seq: &[Value]) -> Vec<Value> {
    seq.iter().filter(|item| is_truthy(item)).cloned().collect()
}

/// Count elements per key.
///
/// # Examples
///
/// ```
/// use record_kit_array::list::count_by;
///
/// let counts = count_by(&["apple", "avocado", "banana"], |s| s.chars().next());
/// assert_eq!(counts[&Some('a')], 2);
/// assert_eq!(counts[&Some('b')], 1);
/// ```
pub fn count_by<T, K, F>(seq: &[T], mut key: F) -> BTreeMap<K, usize>
where
    K: Ord,
    F: FnMut(&T) -> K,
{
    let mut counts = BTreeMap::new();
    for item in seq {
        *counts.entry(key(item)).or_insert(0) += 1;
    }
    counts
}

/// Count JSON values by their object-key form, so `1` and `"1"` share a count.
pub fn count_values(seq: &[Value]) -> BTreeMap<String, usize> {
    count_by(seq, as_property_key)
}

/// Number of elements sharing the object-key form of `value`.
pub fn count_by_value(seq: &[Value], value: &Value) -> usize {
    let target = as_property_key(value);
    seq.iter()
        .filter(|item| as_property_key(item) == target)
        .count()
}

/// Positions at which `value` occurs in `seq`.
pub fn index_of_all<T: PartialEq>(seq: &[T], value: &T) -> Vec<usize> {
    seq.iter()
        .enumerate()
        .filter(|(_, item)| *item == value)
        .map(|(index, _)| index)
        .collect()
}

/// Shuffled copy of `seq`, using the thread-local RNG.
pub fn shuffle<T: Clone>(seq: &[T]) -> Vec<T> {
    shuffle_with(seq, &mut rand::thread_rng())
}

/// Shuffled copy of `seq`, drawing from `rng`.
pub fn shuffle_with<T: Clone, R: Rng + ?Sized>(seq: &[T], rng: &mut R) -> Vec<T> {
    let mut list = seq.to_vec();
    list.shuffle(rng);
    list
}

/// Up to `size` distinct positions of `seq`, picked at random.
pub fn sample<T: Clone>(seq: &[T], size: usize) -> Vec<T> {
    sample_with(seq, size, &mut rand::thread_rng())
}

/// [`sample`] drawing from `rng`.
pub fn sample_with<T: Clone, R: Rng + ?Sized>(seq: &[T], size: usize, rng: &mut R) -> Vec<T> {
    let mut list = shuffle_with(seq, rng);
    list.truncate(size);
    list
}

/// Index a list into an object.
///
/// Each element is stored under the object-key form of `element[key]` when
/// `key` is given and that field is truthy, otherwise under its position.
/// Later elements overwrite earlier ones with the same key. An empty list is
/// logged and yields `None`.
///
/// # Examples
///
/// ```
/// use record_kit_array::list::array_to_object;
/// use serde_json::json;
///
/// let list = vec![json!({"code": "a"}), json!({"code": ""})];
/// let object = array_to_object(&list, Some("code")).unwrap();
///
/// assert_eq!(serde_json::Value::Object(object), json!({"a": {"code": "a"}, "1": {"code": ""}}));
/// ```
pub fn array_to_object(seq: &[Value], key: Option<&str>) -> Option<Map<String, Value>> {
    if seq.is_empty() {
        warn!("array_to_object called with an empty list");
        return None;
    }
    let mut object = Map::new();
    for (index, item) in seq.iter().enumerate() {
        let name = key
            .and_then(|key| item.get(key))
            .filter(|field| is_truthy(field))
            .map(as_property_key)
            .unwrap_or_else(|| index.to_string());
        object.insert(name, item.clone());
    }
    Some(object)
}

/// Whether `value` is an array or an object with a `length` field.
pub fn is_array_like(value: &Value) -> bool {
    match value {
        Value::Array(_) => true,
        Value::Object(fields) => fields.contains_key("length"),
        _ => false,
    }
}

/// Largest `length` an array-like object may declare.
pub const MAX_ARRAY_LIKE_LENGTH: f64 = u32::MAX as f64;

/// Convert an array-like value into a list.
///
/// Arrays are copied. Objects with a numeric `length` are read at keys
/// `"0"` to `length - 1`, with `null` for gaps. Anything else, including a
/// `length` above [`MAX_ARRAY_LIKE_LENGTH`], is logged and yields an empty
/// list.
///
/// # Examples
///
/// ```
/// use record_kit_array::list::array_like_to_array;
/// use serde_json::json;
///
/// let like = json!({"0": "a", "2": "c", "length": 3});
/// assert_eq!(array_like_to_array(&like), vec![json!("a"), json!(null), json!("c")]);
/// ```
pub fn array_like_to_array(value: &Value) -> Vec<Value> {
    if !is_array_like(value) {
        warn!(value = %value, "value is not array-like");
        return Vec::new();
    }
    match value {
        Value::Array(items) => items.clone(),
        Value::Object(fields) => {
            let len = fields
                .get("length")
                .and_then(Value::as_f64)
                .filter(|len| len.is_finite() && *len > 0.0)
                .map_or(0.0, f64::trunc);
            if len > MAX_ARRAY_LIKE_LENGTH {
                warn!(length = len, "array-like length is out of range");
                return Vec::new();
            }
            let mut list = Vec::new();
            for index in 0..len as usize {
                list.push(fields.get(&index.to_string()).cloned().unwrap_or(Value::Null));
            }
            list
        }
        _ => Vec::new(),
    }
}
