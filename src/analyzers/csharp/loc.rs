//! Method LOC counting.
//!
//! A method's LOC is the number of end-of-line trivia trailing the tokens of
//! the top-level statements in its body block. Blank lines and comment-only
//! lines carry no statement token and so never count; a statement spread
//! over several lines counts once per line it ends. The braces of the body
//! block itself are not statement tokens.

use super::trivia::{has_trailing_end_of_line, is_trivia_node};
use crate::core::{MethodBody, MethodDecl};
use tree_sitter::Node;

/// LOC of `method`, or `None` when it has no block body.
pub fn count_method_loc(method: &MethodDecl, source: &str) -> Option<usize> {
    match method.body {
        MethodBody::Block(block) => Some(count_block_loc(block, source)),
        MethodBody::NoBlock(_) => None,
    }
}

/// Sum of end-of-line trivia over the tokens of each direct child statement of `block`.
pub fn count_block_loc(block: Node, source: &str) -> usize {
    let mut cursor = block.walk();
    block
        .named_children(&mut cursor)
        .filter(|statement| !is_trivia_node(*statement))
        .map(|statement| count_statement_lines(statement, source))
        .sum()
}

fn count_statement_lines(node: Node, source: &str) -> usize {
    if is_trivia_node(node) {
        return 0;
    }
    if node.kind() == "interpolated_string_expression" {
        return count_interpolated_string(node, source);
    }
    if is_token(node) {
        return count_token(node, source);
    }

    let mut cursor = node.walk();
    node.children(&mut cursor)
        .map(|child| count_statement_lines(child, source))
        .sum()
}

fn count_token(node: Node, source: &str) -> usize {
    let counted = !node.is_missing()
        && node.end_byte() > node.start_byte()
        && has_trailing_end_of_line(source, node.end_byte());
    usize::from(counted)
}

/// `$"text {expr} text"`: the opening quote and the text pieces never carry
/// trivia, the holes are ordinary tokens, and the closing quote ends the
/// literal like any other token.
fn count_interpolated_string(node: Node, source: &str) -> usize {
    let mut cursor = node.walk();
    let children: Vec<_> = node.children(&mut cursor).collect();
    let last = children.len().saturating_sub(1);

    children
        .into_iter()
        .enumerate()
        .map(|(i, child)| match child.kind() {
            "interpolation" => count_interpolation(child, source),
            _ if i == last => count_token(child, source),
            _ => count_nested_interpolations(child, source),
        })
        .sum()
}

fn count_nested_interpolations(node: Node, source: &str) -> usize {
    let mut cursor = node.walk();
    let children: Vec<_> = node.children(&mut cursor).collect();
    children
        .into_iter()
        .map(|child| match child.kind() {
            "interpolation" => count_interpolation(child, source),
            _ => count_nested_interpolations(child, source),
        })
        .sum()
}

/// `{`, the expression and the alignment count as tokens. The format
/// specifier and whatever follows the closing `}` are literal text.
fn count_interpolation(node: Node, source: &str) -> usize {
    let mut cursor = node.walk();
    let children: Vec<_> = node.children(&mut cursor).collect();
    children
        .into_iter()
        .filter(|child| {
            !matches!(
                child.kind(),
                "}" | "interpolation_brace" | "interpolation_format_clause"
            ) || child.start_byte() == node.start_byte()
        })
        .map(|child| count_statement_lines(child, source))
        .sum()
}

/// Leaves are tokens, and so is any plain string or character literal,
/// whose content pieces and embedded line breaks belong to the literal.
fn is_token(node: Node) -> bool {
    if node.child_count() == 0 {
        return true;
    }
    let kind = node.kind();
    kind.ends_with("string_literal") || kind == "character_literal"
}
