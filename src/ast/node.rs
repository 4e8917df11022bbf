use std::{fmt::Display, fs, path::Path};

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position,
};

/// Node Kinds
///
/// Every construct the grammar produces. The payload of each kind lives in
/// the node's text, e.g. `"name: returnType"` for a function definition.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum NodeKind {
    Program,
    Block,
    FunctionDefinition,
    Parameters,
    Parameter,
    VariableDefinition,
    IfConditional,
    ElseConditional,
    ForLoop,
    Condition,
    Increment,
    Expression,
    Return,
    Statement,
}

impl Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// One element of the syntax tree. A node owns its children outright.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub kind: NodeKind,
    pub text: String,
    pub children: Vec<Node>,
}

impl Node {
    pub fn new(kind: NodeKind) -> Self {
        Node::with_text(kind, String::new())
    }

    pub fn with_text(kind: NodeKind, text: impl Into<String>) -> Self {
        Node {
            kind,
            text: text.into(),
            children: vec![],
        }
    }

    pub fn add_child(&mut self, child: Node) {
        self.children.push(child);
    }

    pub fn child(&self, index: usize) -> Option<&Node> {
        self.children.get(index)
    }

    /// Renders the tree depth-first, one `Kind(text)` line per node,
    /// indented two spaces per level.
    pub fn render(&self) -> String {
        let mut output = String::new();
        self.render_into(&mut output, 0);
        output
    }

    fn render_into(&self, output: &mut String, depth: usize) {
        output.push_str(&"  ".repeat(depth));
        output.push_str(&format!("{}({})\n", self.kind, self.text));

        for child in &self.children {
            child.render_into(output, depth + 1);
        }
    }

    /// Number of nodes in the tree, this one included.
    pub fn size(&self) -> usize {
        1 + self.children.iter().map(Node::size).sum::<usize>()
    }

    pub fn depth(&self) -> usize {
        1 + self.children.iter().map(Node::depth).max().unwrap_or(0)
    }
}

impl Display for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.render())
    }
}

/// Writes the rendered tree to `path`.
pub fn write_tree(node: &Node, path: &Path) -> Result<(), Error> {
    fs::write(path, node.render()).map_err(|error| {
        Error::new(
            ErrorImpl::UnreadableFile {
                path: path.to_string_lossy().into_owned(),
                message: error.to_string(),
            },
            Position::null(),
        )
    })
}
