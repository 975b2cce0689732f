/// Statement class derived from the leading SQL keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SqlKind {
    /// `select ...`
    Select,
    /// `insert ...`
    Insert,
    /// `update ...`
    Update,
    /// `delete ...`
    Delete,
    /// Anything else, including empty input.
    Unknown,
}

impl SqlKind {
    /// Whether an execution of this statement returns a row set.
    pub fn is_select(self) -> bool {
        matches!(self, Self::Select)
    }
}

/// Classify a statement by its first keyword.
///
/// Skips leading whitespace, `#` and `--` line comments, and `/* */` block
/// comments before reading the keyword. Matching is case-insensitive. Only
/// the leading keyword counts; `with` CTEs and vendor statements classify
/// as [`SqlKind::Unknown`].
pub fn classify(sql: &str) -> SqlKind {
    match first_token(sql).as_deref() {
        Some(token) => match token.to_lowercase().as_str() {
            "select" => SqlKind::Select,
            "insert" => SqlKind::Insert,
            "update" => SqlKind::Update,
            "delete" => SqlKind::Delete,
            _ => SqlKind::Unknown,
        },
        None => SqlKind::Unknown,
    }
}

/// The first token after whitespace and comments, or `None` when the input
/// holds nothing else.
fn first_token(sql: &str) -> Option<String> {
    let chars: Vec<char> = sql.chars().collect();
    let len = chars.len();
    let mut i = 0;

    while i < len {
        let c = chars[i];
        if c.is_whitespace() {
            i += 1;
        } else if c == '#' || (c == '-' && chars.get(i + 1) == Some(&'-')) {
            while i < len && chars[i] != '\n' {
                i += 1;
            }
        } else if c == '/' && chars.get(i + 1) == Some(&'*') {
            i += 2;
            while i < len && !(chars[i] == '*' && chars.get(i + 1) == Some(&'/')) {
                i += 1;
            }
            // An unterminated block comment swallows the rest of the input.
            i = (i + 2).min(len);
        } else if c == '"' {
            let mut token = String::from('"');
            i += 1;
            while i < len {
                let q = chars[i];
                token.push(q);
                i += 1;
                if q == '\\' && i < len {
                    token.push(chars[i]);
                    i += 1;
                } else if q == '"' {
                    break;
                }
            }
            return Some(token);
        } else if c.is_ascii_alphabetic() {
            let mut token = String::new();
            while i < len && (chars[i].is_ascii_alphanumeric() || chars[i] == '_') {
                token.push(chars[i]);
                i += 1;
            }
            return Some(token);
        } else {
            return Some(c.to_string());
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("select * from t", SqlKind::Select)]
    #[case("SELECT 1", SqlKind::Select)]
    #[case("Select id from users", SqlKind::Select)]
    #[case("insert into t values (1)", SqlKind::Insert)]
    #[case("UPDATE t set a = 1", SqlKind::Update)]
    #[case("delete from t", SqlKind::Delete)]
    #[case("truncate table t", SqlKind::Unknown)]
    #[case("with cte as (select 1) select * from cte", SqlKind::Unknown)]
    #[case("", SqlKind::Unknown)]
    #[case("   \n\t ", SqlKind::Unknown)]
    fn leading_keyword(#[case] sql: &str, #[case] expected: SqlKind) {
        assert_eq!(classify(sql), expected);
    }

    #[rstest]
    #[case("-- comment\nselect 1")]
    #[case("# comment\nselect 1")]
    #[case("/* comment */ select 1")]
    #[case("  -- c\n /*c*/ SELECT 1")]
    #[case("/* a */\n-- b\n# c\nselect 1")]
    fn comments_do_not_change_classification(#[case] sql: &str) {
        assert_eq!(classify(sql), SqlKind::Select);
    }

    #[test]
    fn select_inside_comment_does_not_count() {
        assert_eq!(classify("/* select */ update t set a = 1"), SqlKind::Update);
        assert_eq!(classify("-- select\ndelete from t"), SqlKind::Delete);
    }

    #[test]
    fn leading_string_literal_is_not_a_keyword() {
        assert_eq!(classify("\"select\" from t"), SqlKind::Unknown);
        assert_eq!(classify("\"a \\\" quoted\" select"), SqlKind::Unknown);
    }

    #[test]
    fn unterminated_block_comment_is_unknown() {
        assert_eq!(classify("/* never closed select 1"), SqlKind::Unknown);
    }

    #[test]
    fn is_select_predicate() {
        assert!(SqlKind::Select.is_select());
        assert!(!SqlKind::Insert.is_select());
        assert!(!SqlKind::Unknown.is_select());
    }
}
