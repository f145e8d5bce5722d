//! Depth-first JSON encoding of a UI tree.
//!
//! The string form is the wire form. `to_value` goes through `serde_json::Value`,
//! whose objects keep insertion order but collapse repeated property keys to the
//! last value; use it for inspection, not for the response body.

use crate::error::UiError;
use crate::node::UiNode;
use serde::Serialize;
use serde_json::Value;

pub fn to_json_string<T: Serialize + ?Sized>(tree: &T) -> Result<String, UiError> {
    Ok(serde_json::to_string(tree)?)
}

pub fn to_json_pretty<T: Serialize + ?Sized>(tree: &T) -> Result<String, UiError> {
    Ok(serde_json::to_string_pretty(tree)?)
}

pub fn to_value(node: &UiNode) -> Result<Value, UiError> {
    Ok(serde_json::to_value(node)?)
}
