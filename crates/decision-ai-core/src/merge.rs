//! Deep merge for request overrides
//!
//! Precedence, applied at every level:
//! - object onto object: merged key by key, recursively
//! - anything else (scalar, array, `null`): the patch value replaces the base
//! - keys only present in the base are kept
//!
//! Callers that must pin a field (the API key) write it after merging.

use serde_json::Value;

/// Merge `patch` into `base` in place; the patch wins on conflicts.
pub fn deep_merge(base: &mut Value, patch: Value) {
    match (base, patch) {
        (Value::Object(base_map), Value::Object(patch_map)) => {
            for (key, patch_value) in patch_map {
                match base_map.get_mut(&key) {
                    Some(base_value) => deep_merge(base_value, patch_value),
                    None => {
                        base_map.insert(key, patch_value);
                    }
                }
            }
        }
        (base, patch) => *base = patch,
    }
}
