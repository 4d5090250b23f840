//! Conversion between flat parent-pointer lists and nested trees.
//!
//! A flat list is a sequence of records, each naming its own id and its
//! parent's id. A tree is a sequence of records, each carrying its children
//! under a list field. Field names are configurable through [`TreeOptions`].

use record_kit_util::{keep_keys_value, remove_keys_value, strict_equal, strict_key};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use tracing::warn;

/// Field names used to read and write tree structure on each record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TreeOptions {
    /// Field holding the record's own id. Default is `"id"`.
    pub id: String,
    /// Field holding the parent's id. Default is `"pid"`.
    pub pid: String,
    /// Field holding the list of child records. Default is `"children"`.
    pub children: String,
}

impl Default for TreeOptions {
    fn default() -> Self {
        Self {
            id: "id".to_string(),
            pid: "pid".to_string(),
            children: "children".to_string(),
        }
    }
}

/// Parameters of [`get_tree_chains`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChainQuery {
    /// Id of the record the chain ends at.
    pub id: Value,
    /// Fields copied into each chain entry. `None` keeps only the id field.
    /// A filter naming exactly one field yields bare values instead of records.
    pub filter: Option<Vec<String>>,
    pub options: TreeOptions,
}

impl Default for ChainQuery {
    fn default() -> Self {
        Self {
            id: Value::Null,
            filter: None,
            options: TreeOptions::default(),
        }
    }
}

fn with_children(record: &Value, field: &str, children: Vec<Value>) -> Value {
    match record {
        Value::Object(fields) => {
            let mut copy = fields.clone();
            copy.insert(field.to_string(), Value::Array(children));
            Value::Object(copy)
        }
        other => other.clone(),
    }
}

/// Nest a flat list into a tree rooted at `parent_id`.
///
/// Every record whose parent field equals `parent_id` (numbers compared by
/// value, so `1.0` matches `1`) becomes a top-level
/// node, with its descendants nested under the children field. Siblings keep
/// their order from `list`. Records whose parent is never reached from
/// `parent_id` are left out, as are records lacking the parent field. The
/// input is not modified.
///
/// # Examples
///
/// ```
/// use record_kit_array::tree::{array_to_tree, TreeOptions};
/// use serde_json::json;
///
/// let list = vec![
///     json!({"id": 1, "pid": 0}),
///     json!({"id": 2, "pid": 1}),
/// ];
/// let tree = array_to_tree(&list, &json!(0), &TreeOptions::default());
///
/// assert_eq!(
///     tree,
///     vec![json!({"id": 1, "pid": 0, "children": [{"id": 2, "pid": 1, "children": []}]})]
/// );
/// ```
pub fn array_to_tree(list: &[Value], parent_id: &Value, options: &TreeOptions) -> Vec<Value> {
    let mut by_parent: HashMap<String, Vec<&Value>> = HashMap::new();
    for record in list {
        if let Some(pid) = record.get(&options.pid) {
            by_parent.entry(strict_key(pid)).or_default().push(record);
        }
    }

    let mut ancestors = vec![parent_id];
    build_level(&by_parent, parent_id, options, &mut ancestors)
}

fn build_level<'a>(
    by_parent: &HashMap<String, Vec<&'a Value>>,
    parent_id: &Value,
    options: &TreeOptions,
    ancestors: &mut Vec<&'a Value>,
) -> Vec<Value> {
    let records = match by_parent.get(&strict_key(parent_id)) {
        Some(records) => records,
        None => return Vec::new(),
    };

    let mut level = Vec::with_capacity(records.len());
    for &record in records {
        let children = match record.get(&options.id) {
            Some(id) if ancestors.iter().any(|seen| strict_equal(seen, id)) => {
                warn!(id = %id, "parent chain loops back on itself, cutting it at this record");
                Vec::new()
            }
            Some(id) => {
                ancestors.push(id);
                let children = build_level(by_parent, id, options, ancestors);
                ancestors.pop();
                children
            }
            None => Vec::new(),
        };
        level.push(with_children(record, &options.children, children));
    }
    level
}

/// Flatten a tree into a list, parents before their children.
///
/// Each record is emitted without its children field, followed by its
/// descendants in child-list order. A missing, empty or non-array children
/// field marks a leaf.
///
/// # Examples
///
/// ```
/// use record_kit_array::tree::{tree_to_array, TreeOptions};
/// use serde_json::json;
///
/// let tree = vec![json!({"id": 1, "children": [{"id": 2}, {"id": 3, "children": []}]})];
/// let list = tree_to_array(&tree, &TreeOptions::default());
///
/// assert_eq!(list, vec![json!({"id": 1}), json!({"id": 2}), json!({"id": 3})]);
/// ```
pub fn tree_to_array(tree: &[Value], options: &TreeOptions) -> Vec<Value> {
    let mut list = Vec::new();
    collect_pre_order(tree, options, &mut list);
    list
}

fn collect_pre_order(tree: &[Value], options: &TreeOptions, out: &mut Vec<Value>) {
    for node in tree {
        out.push(remove_keys_value(node, &[options.children.as_str()]));
        if let Some(Value::Array(children)) = node.get(&options.children) {
            collect_pre_order(children, options, out);
        }
    }
}

/// Path from the top of `tree` down to the record whose id is `query.id`.
///
/// Entries run root first and hold only the filtered fields; fields the record
/// lacks are left out. When the filter names a single field, the entries are
/// that field's values (`null` where absent). An id that is not in the tree
/// gives an empty chain.
///
/// # Examples
///
/// ```
/// use record_kit_array::tree::{get_tree_chains, ChainQuery};
/// use serde_json::json;
///
/// let tree = vec![json!({"id": 1, "pid": 0, "children": [
///     {"id": 2, "pid": 1, "children": [{"id": 3, "pid": 2}]}
/// ]})];
///
/// let query = ChainQuery { id: json!(3), ..Default::default() };
/// assert_eq!(get_tree_chains(&tree, &query), vec![json!({"id": 1}), json!({"id": 2}), json!({"id": 3})]);
///
/// let query = ChainQuery { id: json!(3), filter: Some(vec!["id".into()]), ..Default::default() };
/// assert_eq!(get_tree_chains(&tree, &query), vec![json!(1), json!(2), json!(3)]);
/// ```
pub fn get_tree_chains(tree: &[Value], query: &ChainQuery) -> Vec<Value> {
    let options = &query.options;
    let fields: Vec<&str> = match &query.filter {
        Some(filter) => filter.iter().map(String::as_str).collect(),
        None => vec![options.id.as_str()],
    };

    // Pre-order puts every parent before its descendants, so walking the
    // flattened tree backwards meets each ancestor after the node naming it.
    let mut current = Some(query.id.clone());
    let mut chain = Vec::new();
    for record in tree_to_array(tree, options).iter().rev() {
        let target = match &current {
            Some(target) => target,
            None => break,
        };
        if record.get(&options.id).map_or(false, |id| strict_equal(id, target)) {
            chain.push(keep_keys_value(record, &fields));
            current = record.get(&options.pid).cloned();
        }
    }
    chain.reverse();

    if let Some([only]) = query.filter.as_deref() {
        return chain
            .into_iter()
            .map(|entry| entry.get(only).cloned().unwrap_or(Value::Null))
            .collect();
    }
    chain
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn values(v: Value) -> Vec<Value> {
        match v {
            Value::Array(arr) => arr,
            _ => panic!("Expected array"),
        }
    }

    fn sample_list() -> Vec<Value> {
        values(json!([
            {"id": 1, "pid": 0, "name": "a"},
            {"id": 2, "pid": 1, "name": "b"},
            {"id": 3, "pid": 1, "name": "c"},
            {"id": 4, "pid": 2, "name": "d"},
            {"id": 5, "pid": 0, "name": "e"}
        ]))
    }

    #[test]
    fn test_array_to_tree_nests_children() {
        let tree = array_to_tree(&sample_list(), &json!(0), &TreeOptions::default());
        let expected = values(json!([
            {"id": 1, "pid": 0, "name": "a", "children": [
                {"id": 2, "pid": 1, "name": "b", "children": [
                    {"id": 4, "pid": 2, "name": "d", "children": []}
                ]},
                {"id": 3, "pid": 1, "name": "c", "children": []}
            ]},
            {"id": 5, "pid": 0, "name": "e", "children": []}
        ]));
        assert_eq!(tree, expected);
    }

    #[test]
    fn test_array_to_tree_matches_float_parent_ids() {
        let list = values(json!([{"id": 1, "pid": 0}, {"id": 2, "pid": 1.0}, {"id": 3.0, "pid": 2}]));
        let tree = array_to_tree(&list, &json!(0.0), &TreeOptions::default());
        assert_eq!(
            tree,
            values(json!([
                {"id": 1, "pid": 0, "children": [
                    {"id": 2, "pid": 1.0, "children": [
                        {"id": 3.0, "pid": 2, "children": []}
                    ]}
                ]}
            ]))
        );
    }

    #[test]
    fn test_array_to_tree_empty() {
        let options = TreeOptions::default();
        assert!(array_to_tree(&[], &json!(0), &options).is_empty());
        assert!(array_to_tree(&[], &json!("root"), &options).is_empty());
    }

    #[test]
    fn test_array_to_tree_subtree_root() {
        let tree = array_to_tree(&sample_list(), &json!(1), &TreeOptions::default());
        let ids: Vec<_> = tree.iter().map(|n| n["id"].clone()).collect();
        assert_eq!(ids, vec![json!(2), json!(3)]);
    }

    #[test]
    fn test_array_to_tree_drops_orphans() {
        let list = values(json!([
            {"id": 1, "pid": 0},
            {"id": 2, "pid": 99},
            {"id": 3, "pid": 2},
            {"id": 4},
            "not a record"
        ]));
        let tree = array_to_tree(&list, &json!(0), &TreeOptions::default());
        assert_eq!(tree, values(json!([{"id": 1, "pid": 0, "children": []}])));
    }

    #[test]
    fn test_array_to_tree_record_without_id_is_leaf() {
        let list = values(json!([{"pid": 0, "name": "x"}, {"id": 1, "pid": null}]));
        let tree = array_to_tree(&list, &json!(0), &TreeOptions::default());
        assert_eq!(tree, values(json!([{"pid": 0, "name": "x", "children": []}])));
    }

    #[test]
    fn test_array_to_tree_custom_fields() {
        let list = values(json!([
            {"key": "a", "parent": null},
            {"key": "b", "parent": "a"}
        ]));
        let options = TreeOptions {
            id: "key".to_string(),
            pid: "parent".to_string(),
            children: "items".to_string(),
        };
        let tree = array_to_tree(&list, &Value::Null, &options);
        assert_eq!(
            tree,
            values(json!([
                {"key": "a", "parent": null, "items": [{"key": "b", "parent": "a", "items": []}]}
            ]))
        );
    }

    #[test]
    fn test_array_to_tree_does_not_mutate_input() {
        let list = sample_list();
        let before = list.clone();
        let _ = array_to_tree(&list, &json!(0), &TreeOptions::default());
        assert_eq!(list, before);
    }

    #[test]
    fn test_array_to_tree_cycle_is_cut() {
        let list = values(json!([
            {"id": 1, "pid": 0},
            {"id": 2, "pid": 1},
            {"id": 1, "pid": 2}
        ]));
        let tree = array_to_tree(&list, &json!(0), &TreeOptions::default());
        let expected = values(json!([
            {"id": 1, "pid": 0, "children": [
                {"id": 2, "pid": 1, "children": [
                    {"id": 1, "pid": 2, "children": []}
                ]}
            ]}
        ]));
        assert_eq!(tree, expected);
    }

    #[test]
    fn test_array_to_tree_self_parent_is_cut() {
        let list = values(json!([{"id": 7, "pid": 7}]));
        let tree = array_to_tree(&list, &json!(7), &TreeOptions::default());
        assert_eq!(tree, values(json!([{"id": 7, "pid": 7, "children": []}])));
    }

    #[test]
    fn test_tree_to_array_pre_order() {
        let options = TreeOptions::default();
        let tree = array_to_tree(&sample_list(), &json!(0), &options);
        let list = tree_to_array(&tree, &options);
        let ids: Vec<_> = list.iter().map(|n| n["id"].clone()).collect();
        assert_eq!(ids, vec![json!(1), json!(2), json!(4), json!(3), json!(5)]);
        assert!(list.iter().all(|n| n.get("children").is_none()));
    }

    #[test]
    fn test_tree_to_array_non_array_children_is_leaf() {
        let tree = values(json!([{"id": 1, "children": "oops"}, {"id": 2, "children": null}]));
        let list = tree_to_array(&tree, &TreeOptions::default());
        assert_eq!(list, values(json!([{"id": 1}, {"id": 2}])));
    }

    #[test]
    fn test_tree_to_array_empty() {
        assert!(tree_to_array(&[], &TreeOptions::default()).is_empty());
    }

    fn chain_tree() -> Vec<Value> {
        array_to_tree(
            &values(json!([
                {"id": 1, "pid": 0, "name": "root"},
                {"id": 2, "pid": 1, "name": "mid"},
                {"id": 3, "pid": 2, "name": "leaf"},
                {"id": 4, "pid": 1, "name": "side"}
            ])),
            &json!(0),
            &TreeOptions::default(),
        )
    }

    #[test]
    fn test_get_tree_chains_default_filter() {
        let query = ChainQuery {
            id: json!(3),
            ..Default::default()
        };
        assert_eq!(
            get_tree_chains(&chain_tree(), &query),
            values(json!([{"id": 1}, {"id": 2}, {"id": 3}]))
        );
    }

    #[test]
    fn test_get_tree_chains_single_field_unwraps() {
        let query = ChainQuery {
            id: json!(3),
            filter: Some(vec!["id".to_string()]),
            ..Default::default()
        };
        assert_eq!(get_tree_chains(&chain_tree(), &query), values(json!([1, 2, 3])));
    }

    #[test]
    fn test_get_tree_chains_multiple_fields() {
        let query = ChainQuery {
            id: json!(4),
            filter: Some(vec!["id".to_string(), "name".to_string(), "missing".to_string()]),
            ..Default::default()
        };
        assert_eq!(
            get_tree_chains(&chain_tree(), &query),
            values(json!([{"id": 1, "name": "root"}, {"id": 4, "name": "side"}]))
        );
    }

    #[test]
    fn test_get_tree_chains_missing_field_unwraps_to_null() {
        let query = ChainQuery {
            id: json!(2),
            filter: Some(vec!["label".to_string()]),
            ..Default::default()
        };
        assert_eq!(get_tree_chains(&chain_tree(), &query), values(json!([null, null])));
    }

    #[test]
    fn test_get_tree_chains_float_ids() {
        let tree = values(json!([
            {"id": 1, "pid": 0, "children": [{"id": 2.0, "pid": 1.0, "children": [{"id": 3, "pid": 2}]}]}
        ]));
        let query = ChainQuery {
            id: json!(3.0),
            filter: Some(vec!["id".to_string()]),
            ..Default::default()
        };
        assert_eq!(get_tree_chains(&tree, &query), values(json!([1, 2.0, 3])));
    }

    #[test]
    fn test_get_tree_chains_unknown_id() {
        let query = ChainQuery {
            id: json!(42),
            ..Default::default()
        };
        assert!(get_tree_chains(&chain_tree(), &query).is_empty());
    }

    #[test]
    fn test_get_tree_chains_custom_fields() {
        let options = TreeOptions {
            id: "key".to_string(),
            pid: "parentKey".to_string(),
            children: "nodes".to_string(),
        };
        let tree = values(json!([
            {"key": "a", "parentKey": "", "nodes": [
                {"key": "b", "parentKey": "a", "nodes": [{"key": "c", "parentKey": "b"}]}
            ]}
        ]));
        let query = ChainQuery {
            id: json!("c"),
            filter: Some(vec!["key".to_string()]),
            options,
        };
        assert_eq!(get_tree_chains(&tree, &query), values(json!(["a", "b", "c"])));
    }

    #[test]
    fn test_options_deserialize_partial() {
        let options: TreeOptions = serde_json::from_value(json!({"pid": "parentId"})).unwrap();
        assert_eq!(options.id, "id");
        assert_eq!(options.pid, "parentId");
        assert_eq!(options.children, "children");

        let query: ChainQuery = serde_json::from_value(json!({"id": 5})).unwrap();
        assert_eq!(query.id, json!(5));
        assert_eq!(query.filter, None);
        assert_eq!(query.options, TreeOptions::default());
    }
}
