use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::JsonMap;

/// Key inside [`RunResult::extra`] carrying a human-readable failure message.
pub const MESSAGE_KEY: &str = "message";

/// Key inside [`RunResult::extra`] carrying a rows-affected count for
/// non-row-returning SQL execution.
pub const AFFECTED_ROWS_KEY: &str = "affectedRows";

/// The uniform envelope every adapter returns from `run`.
///
/// `rows` is an ordered sequence of row mappings; an empty sequence with
/// `success = true` is a legal successful outcome (e.g. a `select` matching
/// nothing). `extra` is free-form: failure messages, affected-row counts,
/// upload receipts, whatever the adapter wants to surface next to the rows.
///
/// Wire field names are `success`, `rows`, and `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RunResult {
    /// Whether the invocation succeeded.
    pub success: bool,
    /// Ordered row mappings produced by the invocation.
    #[serde(default)]
    pub rows: Vec<JsonMap>,
    /// Free-form extras mapping.
    #[serde(default)]
    pub extra: JsonMap,
}

impl RunResult {
    /// Successful envelope with no rows and no extras.
    pub fn ok() -> Self {
        Self {
            success: true,
            ..Self::default()
        }
    }

    /// Successful envelope carrying the given rows.
    pub fn with_rows(rows: Vec<JsonMap>) -> Self {
        Self {
            success: true,
            rows,
            extra: JsonMap::new(),
        }
    }

    /// Successful envelope for a rows-affected execution (insert, update,
    /// delete). The count lands in `extra` under [`AFFECTED_ROWS_KEY`].
    pub fn rows_affected(count: u64) -> Self {
        let mut extra = JsonMap::new();
        extra.insert(AFFECTED_ROWS_KEY.to_string(), json!(count));
        Self {
            success: true,
            rows: Vec::new(),
            extra,
        }
    }

    /// Unsuccessful envelope whose `extra` carries a human-readable message
    /// under [`MESSAGE_KEY`].
    pub fn failure(message: impl Into<String>) -> Self {
        let mut extra = JsonMap::new();
        extra.insert(MESSAGE_KEY.to_string(), Value::String(message.into()));
        Self {
            success: false,
            rows: Vec::new(),
            extra,
        }
    }

    /// Insert an extras entry, consuming and returning the envelope.
    pub fn with_extra(mut self, key: impl Into<String>, value: Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }

    /// The failure message from `extra`, if one is present.
    pub fn message(&self) -> Option<&str> {
        self.extra.get(MESSAGE_KEY).and_then(Value::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_success_is_legal() {
        let env = RunResult::ok();
        assert!(env.success);
        assert!(env.rows.is_empty());
        assert!(env.extra.is_empty());
    }

    #[test]
    fn failure_carries_message() {
        let env = RunResult::failure("connection refused");
        assert!(!env.success);
        assert_eq!(env.message(), Some("connection refused"));
    }

    #[test]
    fn rows_affected_lands_in_extra() {
        let env = RunResult::rows_affected(3);
        assert!(env.success);
        assert_eq!(env.extra.get(AFFECTED_ROWS_KEY), Some(&json!(3)));
    }

    #[test]
    fn wire_shape() {
        let mut row = JsonMap::new();
        row.insert("id".into(), json!(1));
        let env = RunResult::with_rows(vec![row]);

        let wire = serde_json::to_value(&env).unwrap();
        assert_eq!(
            wire,
            json!({ "success": true, "rows": [{ "id": 1 }], "extra": {} })
        );
    }

    #[test]
    fn round_trips_through_serde() {
        let env = RunResult::failure("boom").with_extra("code", json!(500));
        let back: RunResult = serde_json::from_value(serde_json::to_value(&env).unwrap()).unwrap();
        assert_eq!(back, env);
    }
}
