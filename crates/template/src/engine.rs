use serde_json::Value;
use tracing::trace;

use crate::error::TemplateError;
use crate::scanner::{Segment, scan};

type JsonMap = serde_json::Map<String, Value>;

/// Extract every lookup key from a template, in source order.
///
/// Duplicates are kept; a key appearing at three sites appears three times.
pub fn extract(template: &str) -> Vec<String> {
    scan(template)
        .into_iter()
        .filter_map(|segment| match segment {
            Segment::Site { key, .. } => Some(key),
            Segment::Literal(_) => None,
        })
        .collect()
}

/// Replace every `{{ key }}` site with the stringified context value bound
/// to its trimmed key.
///
/// Sites whose key is absent from the context survive verbatim, braces
/// included — that is not an error. When the entire template parses as a
/// JSON value, string replacements are escaped (`"` → `\"`, newline → `\n`)
/// so the substituted template stays valid JSON; the check happens once per
/// call and applies to every replacement inside it.
///
/// Fails only when a non-primitive value cannot be JSON-encoded.
pub fn substitute(template: &str, context: &JsonMap) -> Result<String, TemplateError> {
    let json_shaped = serde_json::from_str::<Value>(template).is_ok();
    let mut out = String::with_capacity(template.len());

    for segment in scan(template) {
        match segment {
            Segment::Literal(text) => out.push_str(&text),
            Segment::Site { raw, key } => match context.get(&key) {
                None => {
                    trace!(key = %key, "unbound template key left verbatim");
                    out.push_str(&raw);
                }
                Some(value) => out.push_str(&render(&key, value, json_shaped)?),
            },
        }
    }

    Ok(out)
}

/// Stringify one bound value for insertion into the template.
fn render(key: &str, value: &Value, json_shaped: bool) -> Result<String, TemplateError> {
    match value {
        Value::String(s) => {
            if json_shaped {
                Ok(escape_json_fragment(s))
            } else {
                Ok(s.clone())
            }
        }
        // serde_json renders integers as plain decimals and floats in their
        // shortest round-tripping form, which is exactly the contract.
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        other => serde_json::to_string(other)
            .map_err(|e| TemplateError::encoding(key, e.to_string())),
    }
}

/// Escape a string for insertion inside a JSON-shaped template.
fn escape_json_fragment(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            other => out.push(other),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    fn ctx(pairs: &[(&str, Value)]) -> JsonMap {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn no_sites_round_trips() {
        let s = "select * from users where active = true";
        assert_eq!(substitute(s, &JsonMap::new()).unwrap(), s);
    }

    #[test]
    fn substitutes_string_value() {
        let c = ctx(&[("name", json!("world"))]);
        assert_eq!(substitute("hello {{ name }}", &c).unwrap(), "hello world");
    }

    #[rstest]
    #[case("{{x}}")]
    #[case("{{  x  }}")]
    #[case("{{\n x\t}}")]
    fn whitespace_neutral_lookup(#[case] tpl: &str) {
        let c = ctx(&[("x", json!("v"))]);
        assert_eq!(substitute(tpl, &c).unwrap(), "v");
    }

    #[test]
    fn unbound_key_survives_verbatim() {
        let c = ctx(&[("known", json!(1))]);
        assert_eq!(
            substitute("{{known}} and {{ unknown }}", &c).unwrap(),
            "1 and {{ unknown }}"
        );
    }

    #[test]
    fn primitive_stringification() {
        let c = ctx(&[("n", json!(3.25))]);
        assert_eq!(substitute("v={{n}}", &c).unwrap(), "v=3.25");

        let c = ctx(&[("n", json!(true))]);
        assert_eq!(substitute("v={{n}}", &c).unwrap(), "v=true");

        let c = ctx(&[("n", json!(-17))]);
        assert_eq!(substitute("v={{n}}", &c).unwrap(), "v=-17");
    }

    #[test]
    fn compound_values_json_encode() {
        let c = ctx(&[("list", json!([1, 2, 3])), ("map", json!({"a": 1}))]);
        assert_eq!(
            substitute("l={{list}} m={{map}}", &c).unwrap(),
            r#"l=[1,2,3] m={"a":1}"#
        );
    }

    #[test]
    fn null_json_encodes() {
        let c = ctx(&[("x", Value::Null)]);
        assert_eq!(substitute("v={{x}}", &c).unwrap(), "v=null");
    }

    #[test]
    fn json_shaped_template_escapes_strings() {
        // The template itself is valid JSON, so quotes and newlines in the
        // replacement are escaped to keep it valid after substitution.
        let c = ctx(&[("y", json!("a\"b"))]);
        assert_eq!(
            substitute(r#"{"x": "{{y}}"}"#, &c).unwrap(),
            r#"{"x": "a\"b"}"#
        );

        let c = ctx(&[("y", json!("line1\nline2"))]);
        let out = substitute(r#"{"x": "{{y}}"}"#, &c).unwrap();
        assert_eq!(out, r#"{"x": "line1\nline2"}"#);
        assert!(serde_json::from_str::<Value>(&out).is_ok());
    }

    #[test]
    fn non_json_template_inserts_strings_raw() {
        let c = ctx(&[("y", json!("a\"b"))]);
        assert_eq!(substitute("quote: {{y}}", &c).unwrap(), "quote: a\"b");
    }

    #[test]
    fn extract_returns_keys_in_order_with_duplicates() {
        assert_eq!(
            extract("{{a}} then {{ b.c }} then {{a}}"),
            vec!["a", "b.c", "a"]
        );
        assert_eq!(extract("nothing"), Vec::<String>::new());
    }

    #[test]
    fn extraction_substitution_agreement() {
        let tpl = "{{a}}-{{ b }}-{{a}}";
        let keys = extract(tpl);
        let c: JsonMap = keys.iter().map(|k| (k.clone(), json!("•"))).collect();
        assert_eq!(substitute(tpl, &c).unwrap(), "•-•-•");
    }
}
