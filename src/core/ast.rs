use std::path::{Path, PathBuf};
use tree_sitter::Node;

/// A parsed C# document. Owns its source so nodes can be resolved to text.
#[derive(Clone, Debug)]
pub struct SyntaxTree {
    pub tree: tree_sitter::Tree,
    pub source: String,
    pub path: PathBuf,
}

impl SyntaxTree {
    pub fn root_node(&self) -> Node<'_> {
        self.tree.root_node()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Source text covered by `node`
    pub fn text(&self, node: Node<'_>) -> &str {
        node.utf8_text(self.source.as_bytes()).unwrap_or_default()
    }
}

/// A class declaration and the methods it owns.
#[derive(Clone, Debug)]
pub struct ClassDecl<'t> {
    pub name: String,
    /// Namespace and enclosing types joined with `.`
    pub qualified_name: String,
    pub line: usize,
    pub methods: Vec<MethodDecl<'t>>,
}

#[derive(Clone, Debug)]
pub struct MethodDecl<'t> {
    pub name: String,
    /// `Name(T1, T2)`, used to tell overloads apart
    pub signature: String,
    pub line: usize,
    pub body: MethodBody<'t>,
}

/// Whether a method has a `{ ... }` body to count
#[derive(Clone, Copy, Debug)]
pub enum MethodBody<'t> {
    Block(Node<'t>),
    NoBlock(NoBodyReason),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoBodyReason {
    /// `;`-terminated: abstract, extern, interface or partial declarations
    Abstract,
    /// `=> expression;`
    ExpressionBodied,
}

impl std::fmt::Display for NoBodyReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Abstract => write!(f, "no body"),
            Self::ExpressionBodied => write!(f, "expression body"),
        }
    }
}

impl MethodBody<'_> {
    pub fn has_block(&self) -> bool {
        matches!(self, MethodBody::Block(_))
    }
}
