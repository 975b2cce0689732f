use serde_json::Value;
use tessera_core::JsonMap;
use tessera_template::scanner::{Segment, scan};
use tessera_template::{TemplateError, substitute};

use crate::dialect::PlaceholderStyle;

/// Turn a templated SQL string into an executable statement.
///
/// In safe mode each bound template site becomes a dialect placeholder and
/// its context value joins the argument list, in textual order. Sites whose
/// key is unbound stay in the statement verbatim, with no argument. In
/// non-safe mode the statement is produced by plain template substitution
/// and the argument list is empty; the caller accepts the injection risk.
pub fn escape(
    sql: &str,
    context: &JsonMap,
    style: PlaceholderStyle,
    safe: bool,
) -> Result<(String, Vec<Value>), TemplateError> {
    if !safe {
        return Ok((substitute(sql, context)?, Vec::new()));
    }

    let mut out = String::with_capacity(sql.len());
    let mut args = Vec::new();
    for segment in scan(sql) {
        match segment {
            Segment::Literal(text) => out.push_str(&text),
            Segment::Site { raw, key } => match context.get(&key) {
                Some(value) => {
                    args.push(value.clone());
                    out.push_str(&style.token(args.len()));
                }
                None => out.push_str(&raw),
            },
        }
    }
    Ok((out, args))
}
