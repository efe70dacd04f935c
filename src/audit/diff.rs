//! Field-level diffs for audit update entries

use serde_json::Value;

/// Bookkeeping fields that change on every update and say nothing useful
const IGNORED_FIELDS: &[&str] = &["updated_at"];

/// Describe which top-level fields changed between two record versions
///
/// Returns `None` when nothing but bookkeeping fields changed.
pub fn generate_diff(before: &Value, after: &Value) -> Option<String> {
    let (Value::Object(before_obj), Value::Object(after_obj)) = (before, after) else {
        return (before != after)
            .then(|| format!("{} -> {}", format_value(before), format_value(after)));
    };

    let mut changes = Vec::new();

    for (key, before_val) in before_obj {
        if IGNORED_FIELDS.contains(&key.as_str()) {
            continue;
        }
        match after_obj.get(key) {
            Some(after_val) if after_val != before_val => changes.push(format!(
                "{}: {} -> {}",
                key,
                format_value(before_val),
                format_value(after_val)
            )),
            Some(_) => {}
            None => changes.push(format!("{}: {} -> (removed)", key, format_value(before_val))),
        }
    }

    for (key, after_val) in after_obj {
        if !before_obj.contains_key(key) && !IGNORED_FIELDS.contains(&key.as_str()) {
            changes.push(format!("{}: (added) -> {}", key, format_value(after_val)));
        }
    }

    (!changes.is_empty()).then(|| changes.join(", "))
}

fn format_value(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::String(s) if s.chars().count() > 50 => {
            let head: String = s.chars().take(47).collect();
            format!("\"{}...\"", head)
        }
        Value::String(s) => format!("\"{}\"", s),
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
    fn test_changed_fields_only() {
        let before = json!({"name": "Food", "amount": 500000, "updated_at": "t1"});
        let after = json!({"name": "Food", "amount": 750000, "updated_at": "t2"});

        assert_eq!(
            generate_diff(&before, &after).as_deref(),
            Some("amount: 500000 -> 750000")
        );
    }

    #[test]
    fn test_no_changes() {
        let value = json!({"name": "Trip", "updated_at": "t1"});
        let touched = json!({"name": "Trip", "updated_at": "t2"});
        assert!(generate_diff(&value, &touched).is_none());
    }

    #[test]
    fn test_added_removed_and_collections() {
        let before = json!({"notes": "x", "expenses": []});
        let after = json!({"expenses": [1, 2], "risk": "high"});

        let diff = generate_diff(&before, &after).unwrap();
        assert!(diff.contains("notes: \"x\" -> (removed)"));
        assert!(diff.contains("expenses: [0 items] -> [2 items]"));
        assert!(diff.contains("risk: (added) -> \"high\""));
    }

    #[test]
    fn test_long_strings_are_truncated() {
        let long = "₹".repeat(60);
        let diff = generate_diff(&json!({"d": long}), &json!({"d": "short"})).unwrap();
        assert!(diff.starts_with("d: \""));
        assert!(diff.contains("...\" -> \"short\""));
    }
}
