//! Dotted-path lookup into JSON documents.
//!
//! Paths are dot-separated object keys. A segment that parses as an
//! integer also indexes into arrays, so `data.rows.0.id` reaches the first
//! row's id. An empty path is the document itself.

use serde_json::Value;

/// Looks up `path` inside `value`.
///
/// Returns `None` if any segment is missing.
///
/// # Example
///
/// ```rust
/// use efo_assoc_fetcher::json_path::lookup;
/// use serde_json::json;
///
/// let doc = json!({ "target": { "associatedDiseases": { "count": 620 } } });
/// assert_eq!(lookup(&doc, "target.associatedDiseases.count"), Some(&json!(620)));
/// assert_eq!(lookup(&doc, "target.missing"), None);
/// ```
pub fn lookup<'a>(value: &'a Value, path: &str) -> Option<&'a Value> {
    if path.is_empty() {
        return Some(value);
    }

    path.split('.').try_fold(value, |current, segment| match current {
        Value::Object(map) => map.get(segment),
        Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_lookup_nested_object() {
        let doc = json!({ "a": { "b": { "c": 1 } } });
        assert_eq!(lookup(&doc, "a.b.c"), Some(&json!(1)));
        assert_eq!(lookup(&doc, "a.b"), Some(&json!({ "c": 1 })));
    }

    #[test]
    fn test_lookup_empty_path() {
        let doc = json!([1, 2]);
        assert_eq!(lookup(&doc, ""), Some(&doc));
    }

    #[test]
    fn test_lookup_array_index() {
        let doc = json!({ "rows": [{ "id": "x" }, { "id": "y" }] });
        assert_eq!(lookup(&doc, "rows.1.id"), Some(&json!("y")));
        assert_eq!(lookup(&doc, "rows.2.id"), None);
        assert_eq!(lookup(&doc, "rows.first"), None);
    }

    #[test]
    fn test_lookup_through_scalar() {
        let doc = json!({ "count": 3 });
        assert_eq!(lookup(&doc, "count.value"), None);
    }

    #[test]
    fn test_lookup_missing_key() {
        let doc = json!({ "data": null });
        assert_eq!(lookup(&doc, "data"), Some(&Value::Null));
        assert_eq!(lookup(&doc, "data.rows"), None);
    }
}
