//! Required-field presence
//!
//! Two notions of "missing" exist for request parameters and form records.
//! They are kept as separate, named policies; callers choose one.

use nw_state::Record;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Which values count as missing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingFieldPolicy {
    /// Only `null` is missing
    #[default]
    NullOnly,

    /// `null`, `false`, `0`, `0.0` and `""` are missing
    Falsy,
}

impl MissingFieldPolicy {
    /// Check if a value counts as missing under this policy
    #[must_use]
    pub fn is_missing(self, value: &Value) -> bool {
        match (self, value) {
            (_, Value::Null) => true,
            (Self::NullOnly, _) => false,
            (Self::Falsy, Value::Bool(b)) => !b,
            (Self::Falsy, Value::Number(n)) => n.as_f64() == Some(0.0),
            (Self::Falsy, Value::String(s)) => s.is_empty(),
            (Self::Falsy, Value::Array(_) | Value::Object(_)) => false,
        }
    }
}

/// Names of fields whose value is missing, in record key order
#[must_use]
pub fn find_missing_required_fields(record: &Record, policy: MissingFieldPolicy) -> Vec<String> {
    record
        .iter()
        .filter(|(_, value)| policy.is_missing(value))
        .map(|(field, _)| field.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> Record {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn null_only_follows_key_order() {
        let r = record(json!({"a": 1, "b": null, "c": null}));
        assert_eq!(
            find_missing_required_fields(&r, MissingFieldPolicy::NullOnly),
            vec!["b", "c"]
        );
    }

    #[test]
    fn null_only_keeps_falsy_values() {
        let r = record(json!({"zero": 0, "no": false, "empty": "", "gone": null}));
        assert_eq!(
            find_missing_required_fields(&r, MissingFieldPolicy::NullOnly),
            vec!["gone"]
        );
    }

    #[test]
    fn falsy_treats_zero_false_and_empty_as_missing() {
        let r = record(json!({
            "zero": 0,
            "zero_f": 0.0,
            "no": false,
            "empty": "",
            "gone": null,
            "one": 1,
            "yes": true,
            "text": "x",
            "list": [],
            "obj": {}
        }));
        assert_eq!(
            find_missing_required_fields(&r, MissingFieldPolicy::Falsy),
            vec!["zero", "zero_f", "no", "empty", "gone"]
        );
    }

    #[test]
    fn empty_record_has_nothing_missing() {
        assert!(find_missing_required_fields(&Record::new(), MissingFieldPolicy::Falsy).is_empty());
    }

    #[test]
    fn policy_defaults_to_null_only() {
        assert_eq!(MissingFieldPolicy::default(), MissingFieldPolicy::NullOnly);
    }
}
