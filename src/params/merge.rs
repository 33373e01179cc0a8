//! Null-filtering shallow merge.

use serde_json::{Map, Value};

/// Returns a new map holding every entry of `base`, overwritten by every
/// entry of `overrides` whose value is not `null`.
///
/// Neither input is modified. An absent key and an explicit `null` in
/// `overrides` behave the same: the `base` value survives. Keys that already
/// exist in `base` keep their position; new keys are appended in
/// `overrides` order.
///
/// # Example
///
/// ```rust
/// use repeater::params::merge;
/// use serde_json::json;
///
/// let base = json!({"foo": "bar"});
/// let overrides = json!({"baz": null, "foo": "qux"});
/// let merged = merge(base.as_object().unwrap(), overrides.as_object().unwrap());
///
/// assert_eq!(merged["foo"], "qux");
/// assert!(!merged.contains_key("baz"));
/// ```
#[must_use]
pub fn merge(base: &Map<String, Value>, overrides: &Map<String, Value>) -> Map<String, Value> {
    let mut output = base.clone();
    for (key, value) in overrides {
        if !value.is_null() {
            output.insert(key.clone(), value.clone());
        }
    }
    output
}
