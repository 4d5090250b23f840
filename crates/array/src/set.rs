//! Flattening, uniqueness and set algebra over slices.
//!
//! Elements are compared with [`StrictEq`]: JSON values compare by
//! structure, with numbers compared by value so `1` and `1.0` are the same
//! element. Membership checks are linear scans; inputs are expected to be
//! small lists, not bulk data.

use record_kit_util::StrictEq;
use serde_json::Value;

fn contains<T: StrictEq>(seq: &[T], item: &T) -> bool {
    seq.iter().any(|other| other.strict_eq(item))
}

/// Splice nested arrays into their parent, up to `depth` levels.
///
/// Arrays nested deeper than `depth` stay as they are. A `depth` of `0`
/// returns a plain copy.
///
/// # Examples
///
/// ```
/// use record_kit_array::set::flatten;
/// use serde_json::json;
///
/// let input = vec![json!(1), json!([2, [3, [4]]])];
/// assert_eq!(flatten(&input, 2), vec![json!(1), json!(2), json!(3), json!([4])]);
/// ```
pub fn flatten(seq: &[Value], depth: usize) -> Vec<Value> {
    if depth == 0 {
        return seq.to_vec();
    }
    let mut result = Vec::with_capacity(seq.len());
    for item in seq {
        match item {
            Value::Array(inner) => result.extend(flatten(inner, depth - 1)),
            other => result.push(other.clone()),
        }
    }
    result
}

/// Flatten nested arrays at any depth.
///
/// # Examples
///
/// ```
/// use record_kit_array::set::deep_flatten;
/// use serde_json::json;
///
/// let input = vec![json!(1), json!([2, [3, [4]]])];
/// assert_eq!(deep_flatten(&input), vec![json!(1), json!(2), json!(3), json!(4)]);
/// ```
pub fn deep_flatten(seq: &[Value]) -> Vec<Value> {
    let mut result = Vec::with_capacity(seq.len());
    for item in seq {
        match item {
            Value::Array(inner) => result.extend(deep_flatten(inner)),
            other => result.push(other.clone()),
        }
    }
    result
}

/// Drop repeated elements, keeping the first occurrence of each.
pub fn unique<T: StrictEq + Clone>(seq: &[T]) -> Vec<T> {
    let mut result: Vec<T> = Vec::with_capacity(seq.len());
    for item in seq {
        if !contains(&result, item) {
            result.push(item.clone());
        }
    }
    result
}

/// Elements of `b` that also occur in `a`, in `b`'s order.
///
/// Repeats in `b` are kept: `intersection(&[1], &[1, 1])` is `[1, 1]`.
pub fn intersection<T: StrictEq + Clone>(a: &[T], b: &[T]) -> Vec<T> {
    b.iter().filter(|item| contains(a, *item)).cloned().collect()
}

/// Intersection of any number of sets.
///
/// Folds left, intersecting each following set with the running result, so
/// the order follows the first set. The result holds no repeats. No sets at
/// all yields an empty result.
///
/// # Examples
///
/// ```
/// use record_kit_array::set::intersection_all;
///
/// let result = intersection_all(&[vec![3, 1, 2, 1], vec![1, 2], vec![2, 1, 5]]);
/// assert_eq!(result, vec![1, 2]);
/// ```
pub fn intersection_all<T, S>(sets: &[S]) -> Vec<T>
where
    T: StrictEq + Clone,
    S: AsRef<[T]>,
{
    let mut iter = sets.iter();
    let first = match iter.next() {
        Some(first) => first.as_ref().to_vec(),
        None => return Vec::new(),
    };
    let folded = iter.fold(first, |acc, next| intersection(next.as_ref(), &acc));
    unique(&folded)
}

/// Union of any number of sets: concatenation without repeats.
///
/// Order is first occurrence across the sets in argument order.
///
/// # Examples
///
/// ```
/// use record_kit_array::set::union;
///
/// assert_eq!(union(&[vec![1, 2], vec![2, 3], vec![3, 4]]), vec![1, 2, 3, 4]);
/// ```
pub fn union<T, S>(sets: &[S]) -> Vec<T>
where
    T: StrictEq + Clone,
    S: AsRef<[T]>,
{
    let concatenated: Vec<T> = sets
        .iter()
        .flat_map(|set| set.as_ref().iter().cloned())
        .collect();
    unique(&concatenated)
}

/// Elements in exactly one of `a` and `b`.
///
/// Order follows `union(a, b)`.
pub fn symmetric_difference<T: StrictEq + Clone>(a: &[T], b: &[T]) -> Vec<T> {
    let common = intersection(a, b);
    union(&[a, b])
        .into_iter()
        .filter(|item| !contains(&common, item))
        .collect()
}

/// Symmetric difference of `a` and `b`.
///
/// Despite the name this is not `a \ b`; use [`relative_complement`] for that.
///
/// # Examples
///
/// ```
/// use record_kit_array::set::difference;
///
/// assert_eq!(difference(&[1, 2], &[2, 3]), vec![1, 3]);
/// ```
pub fn difference<T: StrictEq + Clone>(a: &[T], b: &[T]) -> Vec<T> {
    symmetric_difference(a, b)
}

/// Elements of `a` that do not occur in `b`, in `a`'s order.
pub fn relative_complement<T: StrictEq + Clone>(a: &[T], b: &[T]) -> Vec<T> {
    a.iter().filter(|item| !contains(b, *item)).cloned().collect()
}

/// Folds [`difference`] over any number of sets.
///
/// Each following set is differenced with the running result, with the
/// following set's elements first. No sets at all yields an empty result.
pub fn difference_all<T, S>(sets: &[S]) -> Vec<T>
where
    T: StrictEq + Clone,
    S: AsRef<[T]>,
{
    let mut iter = sets.iter();
    let first = match iter.next() {
        Some(first) => first.as_ref().to_vec(),
        None => return Vec::new(),
    };
    iter.fold(first, |acc, next| difference(next.as_ref(), &acc))
}
