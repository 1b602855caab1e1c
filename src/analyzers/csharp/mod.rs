mod declarations;
mod loc;
mod trivia;

pub use declarations::find_classes;
pub use loc::{count_block_loc, count_method_loc};
pub use trivia::{has_trailing_end_of_line, is_trivia_node};

use crate::core::{ClassLoc, MethodBody, MethodLoc, SyntaxTree};
use crate::errors::{Error, Result};
use std::path::{Path, PathBuf};
use tree_sitter::Parser;

/// Wraps a tree-sitter parser loaded with the C# grammar.
pub struct CSharpParser {
    parser: Parser,
}

impl CSharpParser {
    pub fn new() -> Result<Self> {
        let mut parser = Parser::new();
        parser.set_language(&tree_sitter_c_sharp::LANGUAGE.into())?;
        Ok(Self { parser })
    }

    /// Parse `source`. Syntax errors are tolerated and logged; only a parser
    /// that yields no tree at all is an error.
    pub fn parse(&mut self, source: &str, path: impl Into<PathBuf>) -> Result<SyntaxTree> {
        let path = path.into();
        let tree = self
            .parser
            .parse(source, None)
            .ok_or_else(|| Error::parse(&path, "parser produced no syntax tree"))?;

        let root = tree.root_node();
        if root.has_error() {
            let line = first_error_line(root).unwrap_or(1);
            tracing::warn!(
                file = %path.display(),
                line,
                "Syntax errors in document; counting what could be parsed"
            );
        }

        Ok(SyntaxTree {
            tree,
            source: source.to_string(),
            path,
        })
    }
}

fn first_error_line(node: tree_sitter::Node) -> Option<usize> {
    if node.is_error() || node.is_missing() {
        return Some(node.start_position().row + 1);
    }
    let mut cursor = node.walk();
    let children: Vec<_> = node.children(&mut cursor).collect();
    children
        .into_iter()
        .filter(|child| child.has_error())
        .find_map(first_error_line)
}

/// Count every block-bodied method of every class in `tree`.
///
/// Methods without a block body are left out of the result. One `ClassLoc`
/// is produced per class declaration; partial declarations are merged later.
pub fn analyze_tree(tree: &SyntaxTree, project: &Path) -> Vec<ClassLoc> {
    find_classes(tree)
        .into_iter()
        .map(|class| {
            let mut class_loc =
                ClassLoc::new(class.name, class.qualified_name, project, tree.path());
            for method in class.methods {
                match method.body {
                    MethodBody::Block(block) => class_loc.methods.push(MethodLoc {
                        name: method.name,
                        signature: method.signature,
                        line: method.line,
                        loc: count_block_loc(block, &tree.source),
                    }),
                    MethodBody::NoBlock(reason) => tracing::debug!(
                        file = %tree.path().display(),
                        line = method.line,
                        method = %method.signature,
                        "Skipping method with {}",
                        reason
                    ),
                }
            }
            class_loc
        })
        .collect()
}
