//! record-kit-util - Record helpers for record-kit
//!
//! A record is a JSON object (`serde_json::Map<String, Value>`). This crate
//! provides the field-level helpers the array and tree utilities build on.

pub mod object;
pub mod property_key;
pub mod strict_eq;
pub mod truthy;

// Re-exports for convenience
pub use object::{
    extend, keep_keys, keep_keys_value, remove_keys, remove_keys_value, replace_keys, Record,
};
pub use property_key::as_property_key;
pub use strict_eq::{strict_equal, strict_key, StrictEq};
pub use truthy::is_truthy;
