//! Normalization of driver rows into JSON objects.
//!
//! Drivers return a mix of native JSON values and raw byte columns. This is
//! the single place that decides how bytes become strings and how duplicate
//! column names stay addressable in the resulting objects.

use serde_json::Value;
use tessera_core::JsonMap;
use uuid::Uuid;

/// One column value as the driver produced it.
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnValue {
    /// Raw bytes the driver did not interpret.
    Bytes(Vec<u8>),
    /// A value the driver already decoded.
    Value(Value),
}

/// Build JSON row objects from driver columns and rows.
///
/// Byte columns decode as UTF-8 strings; 16-byte columns that are not valid
/// UTF-8 render as dashed UUIDs, any other invalid UTF-8 decodes lossily.
/// Duplicate column names get positional suffixes (`id_0`, `id_1`, ...) in
/// first-occurrence order so no value is silently dropped.
///
/// Every row must carry exactly one value per column; a mismatch is a driver
/// bug, caught in debug builds. Release builds zip to the shorter side.
pub fn from_driver_rows<R>(columns: &[String], driver_rows: R) -> Vec<JsonMap>
where
    R: IntoIterator<Item = Vec<ColumnValue>>,
{
    let keys = dedupe_columns(columns);
    driver_rows
        .into_iter()
        .map(|row| {
            debug_assert_eq!(
                row.len(),
                keys.len(),
                "row length does not match column list"
            );
            keys.iter()
                .cloned()
                .zip(row.into_iter().map(normalize))
                .collect()
        })
        .collect()
}

fn dedupe_columns(columns: &[String]) -> Vec<String> {
    let mut counts = std::collections::HashMap::new();
    for name in columns {
        *counts.entry(name.as_str()).or_insert(0usize) += 1;
    }

    let mut seen = std::collections::HashMap::new();
    columns
        .iter()
        .map(|name| {
            if counts[name.as_str()] == 1 {
                name.clone()
            } else {
                let index = seen.entry(name.as_str()).or_insert(0usize);
                let keyed = format!("{name}_{index}");
                *index += 1;
                keyed
            }
        })
        .collect()
}

fn normalize(value: ColumnValue) -> Value {
    match value {
        ColumnValue::Value(v) => v,
        ColumnValue::Bytes(bytes) => match String::from_utf8(bytes) {
            Ok(text) => Value::String(text),
            Err(err) => {
                let bytes = err.into_bytes();
                if let Ok(uuid) = Uuid::from_slice(&bytes) {
                    Value::String(uuid.to_string())
                } else {
                    Value::String(String::from_utf8_lossy(&bytes).into_owned())
                }
            }
        },
    }
}
