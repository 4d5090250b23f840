//! record-kit-array - Set algebra and tree conversion over JSON records
//!
//! # Overview
//!
//! - [`set`]: flattening, uniqueness, union / intersection / difference and
//!   their n-ary folds.
//! - [`tree`]: flat parent-pointer list to nested tree and back, plus the
//!   root-to-node chain query.
//! - [`list`]: smaller list helpers (chunking, counting, sampling, indexing).
//!
//! # Example
//!
//! ```
//! use record_kit_array::{array_to_tree, tree_to_array, TreeOptions};
//! use serde_json::json;
//!
//! let list = vec![
//!     json!({"id": 1, "pid": 0}),
//!     json!({"id": 2, "pid": 1}),
//!     json!({"id": 3, "pid": 1}),
//! ];
//! let options = TreeOptions::default();
//! let tree = array_to_tree(&list, &json!(0), &options);
//!
//! assert_eq!(tree.len(), 1);
//! assert_eq!(tree_to_array(&tree, &options), list);
//! ```

pub mod error;
pub mod list;
pub mod set;
pub mod tree;

pub use error::ArrayError;
pub use list::{
    array_like_to_array, array_to_object, as_arr, chunk, compact, count_by, count_by_value,
    count_values, index_of_all, is_array_like, sample, sample_with, shuffle, shuffle_with,
};
pub use set::{
    deep_flatten, difference, difference_all, flatten, intersection, intersection_all,
    relative_complement, symmetric_difference, union, unique,
};
pub use tree::{array_to_tree, get_tree_chains, tree_to_array, ChainQuery, TreeOptions};
