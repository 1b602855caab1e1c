use super::trivia::is_trivia_node;
use crate::core::{ClassDecl, MethodBody, MethodDecl, NoBodyReason, SyntaxTree};
use tree_sitter::Node;

/// Type declarations that scope nested names but are not classes themselves
const OTHER_TYPE_DECLARATIONS: &[&str] = &[
    "struct_declaration",
    "interface_declaration",
    "record_declaration",
    "record_struct_declaration",
    "enum_declaration",
];

/// Find every class in `tree` with the methods it owns.
///
/// Classes are returned in document order, outer classes before the classes
/// nested in them. A method belongs only to its nearest enclosing class, so a
/// method of a nested class is never reported for the outer class.
pub fn find_classes(tree: &SyntaxTree) -> Vec<ClassDecl<'_>> {
    let mut finder = DeclarationFinder {
        tree,
        scopes: Vec::new(),
        classes: Vec::new(),
    };
    finder.visit_children(tree.root_node(), None);
    finder.classes
}

struct DeclarationFinder<'t> {
    tree: &'t SyntaxTree,
    scopes: Vec<String>,
    classes: Vec<ClassDecl<'t>>,
}

impl<'t> DeclarationFinder<'t> {
    fn visit_children(&mut self, node: Node<'t>, owner: Option<usize>) {
        let mut cursor = node.walk();
        let children: Vec<_> = node.children(&mut cursor).collect();
        let depth = self.scopes.len();

        for child in children {
            if child.kind() == "file_scoped_namespace_declaration" {
                // `namespace A.B;` scopes the rest of the file
                let name = self.name_of(child);
                self.scopes.push(name);
            }
            self.visit(child, owner);
        }
        self.scopes.truncate(depth);
    }

    fn visit(&mut self, node: Node<'t>, owner: Option<usize>) {
        match node.kind() {
            "namespace_declaration" => {
                let name = self.name_of(node);
                self.visit_scoped(node, name, owner);
            }
            "class_declaration" => {
                let name = self.name_of(node);
                let index = self.classes.len();
                self.classes.push(ClassDecl {
                    qualified_name: self.qualify(&name),
                    name: name.clone(),
                    line: node.start_position().row + 1,
                    methods: Vec::new(),
                });
                self.visit_scoped(node, name, Some(index));
            }
            kind if OTHER_TYPE_DECLARATIONS.contains(&kind) => {
                let name = self.name_of(node);
                self.visit_scoped(node, name, owner);
            }
            "method_declaration" => {
                if let Some(index) = owner {
                    let method = self.method(node);
                    self.classes[index].methods.push(method);
                }
            }
            _ => self.visit_children(node, owner),
        }
    }

    fn visit_scoped(&mut self, node: Node<'t>, name: String, owner: Option<usize>) {
        self.scopes.push(name);
        self.visit_children(node, owner);
        self.scopes.pop();
    }

    fn qualify(&self, name: &str) -> String {
        self.scopes
            .iter()
            .map(String::as_str)
            .chain(std::iter::once(name))
            .collect::<Vec<_>>()
            .join(".")
    }

    fn name_of(&self, node: Node<'t>) -> String {
        node.child_by_field_name("name")
            .map(|name| self.tree.text(name).to_string())
            .unwrap_or_else(|| "<anonymous>".to_string())
    }

    fn method(&self, node: Node<'t>) -> MethodDecl<'t> {
        let name = self.name_of(node);
        let parameters = node
            .child_by_field_name("parameters")
            .map(|list| self.parameter_types(list))
            .unwrap_or_default();

        let mut signature = String::new();
        if let Some(interface) = self.explicit_interface(node) {
            signature.push_str(&interface);
            signature.push('.');
        }
        signature.push_str(&name);
        let arity = type_parameter_count(node);
        if arity > 0 {
            signature.push_str(&format!("`{arity}"));
        }
        signature.push_str(&format!("({})", parameters.join(", ")));

        MethodDecl {
            signature,
            name,
            line: node.start_position().row + 1,
            body: method_body(node),
        }
    }

    /// `IA` for `void IA.Run()`, whitespace removed
    fn explicit_interface(&self, node: Node<'t>) -> Option<String> {
        let mut cursor = node.walk();
        let specifier = node
            .children(&mut cursor)
            .find(|c| c.kind() == "explicit_interface_specifier")?;
        let text: String = self
            .tree
            .text(specifier)
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect();
        Some(text.trim_end_matches('.').to_string())
    }

    /// Parameter text without attributes, name or default value, e.g. `ref int`.
    ///
    /// Parameters are split on the list's own commas so that `params` arrays,
    /// which the grammar may not wrap in a `parameter` node, are kept.
    fn parameter_types(&self, list: Node<'t>) -> Vec<String> {
        let mut cursor = list.walk();
        let mut segments: Vec<Vec<Node<'t>>> = vec![Vec::new()];
        for child in list.children(&mut cursor) {
            match child.kind() {
                "(" | ")" => {}
                "," => segments.push(Vec::new()),
                _ if is_trivia_node(child) => {}
                _ => {
                    if let Some(segment) = segments.last_mut() {
                        segment.push(child);
                    }
                }
            }
        }

        segments
            .iter()
            .filter(|segment| !segment.is_empty())
            .map(|segment| self.parameter_type(segment))
            .collect()
    }

    fn parameter_type(&self, segment: &[Node<'t>]) -> String {
        let nodes: Vec<Node<'t>> = match segment {
            [parameter] if parameter.kind() == "parameter" => {
                let mut cursor = parameter.walk();
                parameter.children(&mut cursor).collect()
            }
            _ => segment.to_vec(),
        };
        let (Some(first), Some(last)) = (nodes.first(), nodes.last()) else {
            return String::new();
        };

        let start = nodes
            .iter()
            .filter(|n| n.kind() == "attribute_list")
            .last()
            .map_or(first.start_byte(), |attrs| attrs.end_byte());
        let end = match segment {
            [parameter] if parameter.kind() == "parameter" => parameter
                .child_by_field_name("name")
                .map_or(last.end_byte(), |name| name.start_byte()),
            _ => nodes
                .iter()
                .rev()
                .find(|n| n.kind() == "identifier")
                .map_or(last.end_byte(), |name| name.start_byte()),
        };

        let text = self.tree.source.get(start..end.max(start)).unwrap_or_default();
        text.split_whitespace().collect::<Vec<_>>().join(" ")
    }
}

fn type_parameter_count(node: Node) -> usize {
    let list = node.child_by_field_name("type_parameters").or_else(|| {
        let mut cursor = node.walk();
        let found = node
            .children(&mut cursor)
            .find(|c| c.kind() == "type_parameter_list");
        found
    });
    list.map_or(0, |list| {
        let mut cursor = list.walk();
        let count = list
            .named_children(&mut cursor)
            .filter(|c| c.kind() == "type_parameter")
            .count();
        count
    })
}

fn method_body(node: Node) -> MethodBody {
    let body = node.child_by_field_name("body").or_else(|| {
        let mut cursor = node.walk();
        let found = node
            .children(&mut cursor)
            .find(|c| matches!(c.kind(), "block" | "arrow_expression_clause"));
        found
    });

    match body {
        Some(block) if block.kind() == "block" => MethodBody::Block(block),
        Some(_) => MethodBody::NoBlock(NoBodyReason::ExpressionBodied),
        None => MethodBody::NoBlock(NoBodyReason::Abstract),
    }
}
