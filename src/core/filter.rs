//! Recursive filtering of translation trees by dotted key.
//!
//! A translation tree is a JSON object whose leaves are addressed by joining
//! ancestor keys with `.` (e.g. `nav.home.title`). Arrays are opaque leaves:
//! they are kept or dropped whole and their elements are never addressed by index.

use std::collections::BTreeSet;

use serde_json::{Map, Value};

/// Builds the dotted path of `key` below `prefix`.
fn join_key(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{}.{}", prefix, key)
    }
}

/// Returns a new tree holding exactly the leaves whose dotted path is in `allowed`.
///
/// Nesting is preserved and branches left without leaves are omitted at every depth.
/// Allowed keys that don't exist in the tree are ignored. The input is never modified
/// and output keys keep the input order.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeSet;
/// use keyprune::core::filter_tree;
/// use serde_json::json;
///
/// let tree = json!({"nav": {"home": "Home", "contact": "Contact"}, "footer": {"copy": "©"}});
/// let allowed: BTreeSet<String> = ["nav.home".to_string()].into();
///
/// let filtered = filter_tree(tree.as_object().unwrap(), &allowed);
/// assert_eq!(serde_json::Value::Object(filtered), json!({"nav": {"home": "Home"}}));
/// ```
pub fn filter_tree(tree: &Map<String, Value>, allowed: &BTreeSet<String>) -> Map<String, Value> {
    filter_level(tree, allowed, "")
}

fn filter_level(
    tree: &Map<String, Value>,
    allowed: &BTreeSet<String>,
    prefix: &str,
) -> Map<String, Value> {
    let mut result = Map::new();

    for (key, value) in tree {
        let full_key = join_key(prefix, key);
        match value {
            Value::Object(children) => {
                let filtered = filter_level(children, allowed, &full_key);
                if !filtered.is_empty() {
                    result.insert(key.clone(), Value::Object(filtered));
                }
            }
            leaf => {
                if allowed.contains(&full_key) {
                    result.insert(key.clone(), leaf.clone());
                }
            }
        }
    }

    result
}

/// Lists the dotted paths of every leaf in document order.
///
/// Empty objects contribute nothing; arrays count as a single leaf.
pub fn flatten_keys(tree: &Map<String, Value>) -> Vec<String> {
    let mut keys = Vec::new();
    collect_leaf_keys(tree, "", &mut keys);
    keys
}

fn collect_leaf_keys(tree: &Map<String, Value>, prefix: &str, keys: &mut Vec<String>) {
    for (key, value) in tree {
        let full_key = join_key(prefix, key);
        match value {
            Value::Object(children) => collect_leaf_keys(children, &full_key, keys),
            _ => keys.push(full_key),
        }
    }
}

/// Returns the allowed keys that don't resolve to a leaf of `tree`, sorted.
pub fn missing_keys(tree: &Map<String, Value>, allowed: &BTreeSet<String>) -> Vec<String> {
    let present: BTreeSet<String> = flatten_keys(tree).into_iter().collect();
    allowed.difference(&present).cloned().collect()
}
