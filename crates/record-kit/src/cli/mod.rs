//! `cli` — logic behind the command-line tools.
//!
//! Every tool reads JSON text and returns pretty-printed JSON text:
//! - `array2tree`  — nest a flat record list into a tree
//! - `tree2array`  — flatten a tree back into a record list
//! - `tree-chains` — root-to-node chain of a tree
//! - `json-set`    — set algebra over JSON arrays

use record_kit_array::{
    array_to_tree, as_arr, difference_all, get_tree_chains, intersection_all,
    relative_complement, tree_to_array, union, ArrayError, ChainQuery, TreeOptions,
};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{json, Value};
use std::str::FromStr;
use thiserror::Error;
use tracing::debug;

// ── Errors ────────────────────────────────────────────────────────────────

#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Array(#[from] ArrayError),

    #[error("Unknown set operation: {0}")]
    UnknownOperation(String),

    #[error("{0}")]
    Usage(String),
}

// ── Options ───────────────────────────────────────────────────────────────

/// Options accepted by `array2tree`: the tree field names plus the root id.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ArrayToTreeArgs {
    /// Parent id of the top-level records. Default is `0`.
    pub root: Value,
    #[serde(flatten)]
    pub options: TreeOptions,
}

impl Default for ArrayToTreeArgs {
    fn default() -> Self {
        Self {
            root: json!(0),
            options: TreeOptions::default(),
        }
    }
}

fn parse_options<T: DeserializeOwned + Default>(options_json: Option<&str>) -> Result<T, CliError> {
    match options_json.map(str::trim) {
        None | Some("") => Ok(T::default()),
        Some(text) => Ok(serde_json::from_str(text)?),
    }
}

fn parse_list(json: &str) -> Result<Vec<Value>, CliError> {
    let value: Value = serde_json::from_str(json)?;
    Ok(as_arr(&value)?.clone())
}

fn to_pretty(list: Vec<Value>) -> Result<String, CliError> {
    Ok(serde_json::to_string_pretty(&Value::Array(list))?)
}

// ── array2tree / tree2array ───────────────────────────────────────────────

/// Nest a flat record list (JSON array text) into a tree.
///
/// `options_json` holds any of `id`, `pid`, `children` and `root`.
pub fn array_to_tree_json(list_json: &str, options_json: Option<&str>) -> Result<String, CliError> {
    let list = parse_list(list_json)?;
    let args: ArrayToTreeArgs = parse_options(options_json)?;
    debug!(records = list.len(), root = %args.root, "nesting flat list");
    to_pretty(array_to_tree(&list, &args.root, &args.options))
}

/// Flatten a tree (JSON array text) into a record list.
pub fn tree_to_array_json(tree_json: &str, options_json: Option<&str>) -> Result<String, CliError> {
    let tree = parse_list(tree_json)?;
    let options: TreeOptions = parse_options(options_json)?;
    to_pretty(tree_to_array(&tree, &options))
}

// ── tree-chains ───────────────────────────────────────────────────────────

/// Chain from the top of a tree down to the record named by the query.
///
/// `query_json` must carry an `id`; `filter` and `options` are optional.
pub fn tree_chains_json(tree_json: &str, query_json: &str) -> Result<String, CliError> {
    let tree = parse_list(tree_json)?;
    let raw: Value = serde_json::from_str(query_json)?;
    if raw.get("id").is_none() {
        return Err(CliError::Usage("Query must name an \"id\".".to_string()));
    }
    let query: ChainQuery = serde_json::from_value(raw)?;
    debug!(id = %query.id, "looking up chain");
    to_pretty(get_tree_chains(&tree, &query))
}

// ── json-set ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetOperation {
    Union,
    Intersection,
    /// Symmetric difference, folded over the arguments.
    Difference,
    /// First argument minus every following one.
    RelativeComplement,
}

impl FromStr for SetOperation {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "union" => Ok(SetOperation::Union),
            "intersection" => Ok(SetOperation::Intersection),
            "difference" | "symmetric-difference" => Ok(SetOperation::Difference),
            "relative-complement" | "minus" => Ok(SetOperation::RelativeComplement),
            other => Err(CliError::UnknownOperation(other.to_string())),
        }
    }
}

impl SetOperation {
    pub fn apply(self, sets: &[Vec<Value>]) -> Vec<Value> {
        match self {
            SetOperation::Union => union(sets),
            SetOperation::Intersection => intersection_all(sets),
            SetOperation::Difference => difference_all(sets),
            SetOperation::RelativeComplement => match sets.split_first() {
                Some((first, rest)) => rest
                    .iter()
                    .fold(first.clone(), |acc, next| relative_complement(&acc, next)),
                None => Vec::new(),
            },
        }
    }
}

/// Apply the set operation named `op` to JSON array texts.
pub fn set_operation_json<S: AsRef<str>>(op: &str, sets_json: &[S]) -> Result<String, CliError> {
    let operation = SetOperation::from_str(op)?;
    if sets_json.is_empty() {
        return Err(CliError::Usage("At least one JSON array is required.".to_string()));
    }
    let sets = sets_json
        .iter()
        .map(|json| parse_list(json.as_ref()))
        .collect::<Result<Vec<_>, _>>()?;
    debug!(?operation, sets = sets.len(), "applying set operation");
    to_pretty(operation.apply(&sets))
}

// ── Tests ─────────────────────────────────────────────────────────────────
