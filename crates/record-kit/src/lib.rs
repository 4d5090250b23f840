//! record-kit — tree/list conversion and set algebra over JSON records.
//!
//! Re-exports the library crates and hosts the logic behind the
//! command-line tools:
//! - [`record_kit_array`]: set algebra, tree conversion, list helpers
//! - [`record_kit_util`]: record field helpers
//! - [`cli`]: JSON-text entry points used by the binaries
//!
//! # Example
//!
//! ```
//! use record_kit::{array_to_tree, get_tree_chains, ChainQuery, TreeOptions};
//! use serde_json::json;
//!
//! let list = vec![
//!     json!({"id": 1, "pid": 0, "name": "docs"}),
//!     json!({"id": 2, "pid": 1, "name": "guide"}),
//! ];
//! let tree = array_to_tree(&list, &json!(0), &TreeOptions::default());
//!
//! let query = ChainQuery {
//!     id: json!(2),
//!     filter: Some(vec!["name".to_string()]),
//!     ..Default::default()
//! };
//! assert_eq!(get_tree_chains(&tree, &query), vec![json!("docs"), json!("guide")]);
//! ```

pub mod cli;
pub mod logging;

pub use record_kit_array::{
    array_to_tree, deep_flatten, difference, difference_all, flatten, get_tree_chains,
    intersection, intersection_all, relative_complement, symmetric_difference, tree_to_array,
    union, unique, ArrayError, ChainQuery, TreeOptions,
};
pub use record_kit_array::{list, set, tree};
pub use record_kit_util::{keep_keys, remove_keys, replace_keys, Record};
