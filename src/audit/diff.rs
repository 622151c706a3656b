//! Diff generation for audit logging
//!
//! Produces a one-line summary of the top-level fields that changed
//! between two JSON snapshots.

use serde_json::Value;

/// Generate a human-readable diff between two JSON values
///
/// Returns `None` when nothing changed.
pub fn generate_diff(before: &Value, after: &Value) -> Option<String> {
    match (before, after) {
        (Value::Object(before_obj), Value::Object(after_obj)) => {
            let mut changes = Vec::new();

            for (key, before_val) in before_obj {
                match after_obj.get(key) {
                    Some(after_val) if after_val != before_val => changes.push(format!(
                        "{}: {} -> {}",
                        key,
                        format_value(before_val),
                        format_value(after_val)
                    )),
                    Some(_) => {}
                    None => changes.push(format!(
                        "{}: {} -> (removed)",
                        key,
                        format_value(before_val)
                    )),
                }
            }

            for (key, after_val) in after_obj {
                if !before_obj.contains_key(key) {
                    changes.push(format!("{}: (added) -> {}", key, format_value(after_val)));
                }
            }

            if changes.is_empty() {
                None
            } else {
                Some(changes.join(", "))
            }
        }
        _ if before != after => Some(format!(
            "{} -> {}",
            format_value(before),
            format_value(after)
        )),
        _ => None,
    }
}

fn format_value(value: &Value) -> String {
    match value {
        Value::String(s) if s.chars().count() > 50 => {
            let head: String = s.chars().take(47).collect();
            format!("\"{}...\"", head)
        }
        Value::Array(arr) if arr.iter().all(|v| !v.is_array() && !v.is_object()) => {
            let items: Vec<String> = arr.iter().map(format_value).collect();
            format!("[{}]", items.join(", "))
        }
        Value::Array(arr) => format!("[{} items]", arr.len()),
        Value::Object(obj) => format!("{{{} fields}}", obj.len()),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_changed_fields() {
        let before = json!({"paycheckDays": [1, 16], "netPerPaycheck": 2000, "extras": 0});
        let after = json!({"paycheckDays": [5, 20], "netPerPaycheck": 2000, "extras": 0});

        assert_eq!(
            generate_diff(&before, &after).as_deref(),
            Some("paycheckDays: [1, 16] -> [5, 20]")
        );
    }

    #[test]
    fn test_no_changes() {
        let value = json!({"extras": 0});
        assert_eq!(generate_diff(&value, &value), None);
    }

    #[test]
    fn test_added_and_removed_fields() {
        let diff = generate_diff(&json!({"a": 1}), &json!({"b": "x"})).unwrap();
        assert!(diff.contains("a: 1 -> (removed)"));
        assert!(diff.contains("b: (added) -> \"x\""));
    }

    #[test]
    fn test_scalar_values() {
        assert_eq!(generate_diff(&json!(1), &json!(2)).as_deref(), Some("1 -> 2"));
    }
}
