//! Splits a template string into literal runs and `{{ … }}` substitution
//! sites.
//!
//! The scanner is shared by the substitution engine and by the SQL escaper,
//! which both walk the same segment sequence but replace sites differently.

/// Whitespace characters stripped from a captured key.
const KEY_WHITESPACE: &[char] = &[' ', '\t', '\n', '\x0B', '\x0C', '\r'];

/// One segment of a scanned template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Literal text, emitted unchanged.
    Literal(String),
    /// A recognized `{{ … }}` substitution site.
    Site {
        /// The full source text of the site, braces included.
        raw: String,
        /// The whitespace-trimmed lookup key.
        key: String,
    },
}

/// Scan a template into an ordered sequence of segments.
///
/// Recognition rules:
///
/// - `{{` opens a site and `}}` closes it; unmatched single braces are
///   literal.
/// - In a run of three or more `{`, the two rightmost become the opener and
///   the rest are literal.
/// - A `{` appearing inside an open site breaks it: the buffered `{{` and
///   captured text are emitted literally and the `{` is rescanned.
/// - A site left open at end of input is emitted literally.
///
/// The key may contain dots, brackets, and identifier characters; it is
/// never parsed, only trimmed and compared.
pub fn scan(input: &str) -> Vec<Segment> {
    let chars: Vec<char> = input.chars().collect();
    let len = chars.len();

    let mut segments = Vec::new();
    let mut literal = String::new();
    let mut i = 0;

    while i < len {
        if chars[i] != '{' {
            literal.push(chars[i]);
            i += 1;
            continue;
        }

        let mut run = 0;
        while i + run < len && chars[i + run] == '{' {
            run += 1;
        }
        if run < 2 {
            literal.push('{');
            i += 1;
            continue;
        }

        // Two rightmost braces open the site; the rest stay literal.
        for _ in 0..run - 2 {
            literal.push('{');
        }
        i += run;

        let mut body = String::new();
        let mut closed = false;
        while i < len {
            if chars[i] == '}' && i + 1 < len && chars[i + 1] == '}' {
                closed = true;
                i += 2;
                break;
            }
            if chars[i] == '{' {
                // Broken site: the `{` is rescanned by the outer loop.
                break;
            }
            body.push(chars[i]);
            i += 1;
        }

        if closed {
            if !literal.is_empty() {
                segments.push(Segment::Literal(std::mem::take(&mut literal)));
            }
            segments.push(Segment::Site {
                raw: format!("{{{{{body}}}}}"),
                key: body.trim_matches(KEY_WHITESPACE).to_string(),
            });
        } else {
            literal.push_str("{{");
            literal.push_str(&body);
        }
    }

    if !literal.is_empty() {
        segments.push(Segment::Literal(literal));
    }
    segments
}
