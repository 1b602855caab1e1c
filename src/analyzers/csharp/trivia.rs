//! Trailing-trivia detection over source text.
//!
//! tree-sitter keeps no trivia, so a token's trailing trivia is recovered
//! from the text after it: whitespace and comments up to and including the
//! first line break. A token carries at most one end-of-line trivia, and
//! only when a line break is reached before any other token.

use tree_sitter::Node;

/// Comments and preprocessor directives are trivia, never tokens.
pub fn is_trivia_node(node: Node) -> bool {
    let kind = node.kind();
    kind == "comment" || kind.starts_with("preproc")
}

/// Does the token ending at byte `offset` carry an end-of-line trivia?
pub fn has_trailing_end_of_line(source: &str, offset: usize) -> bool {
    let Some(rest) = source.get(offset..) else {
        return false;
    };
    let mut chars = rest.char_indices().peekable();

    while let Some((at, c)) = chars.next() {
        match c {
            '\n' | '\r' | '\u{0085}' | '\u{2028}' | '\u{2029}' => return true,
            '/' if rest[at + 1..].starts_with('/') => {
                // single-line comment runs up to the line break
                while chars.next_if(|&(_, c)| !is_line_break(c)).is_some() {}
            }
            '/' if rest[at + 1..].starts_with('*') => match rest[at + 2..].find("*/") {
                Some(end) => {
                    let resume = at + 2 + end + 2;
                    while chars.next_if(|&(i, _)| i < resume).is_some() {}
                }
                None => return false,
            },
            c if c.is_whitespace() => {}
            _ => return false,
        }
    }
    false
}

fn is_line_break(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{0085}' | '\u{2028}' | '\u{2029}')
}
