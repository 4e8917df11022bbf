/// AST (Abstract Syntax Tree) module
/// Contains the syntax tree produced by the parser
///
/// Submodules:
/// - node: The node type, its kinds, and the textual tree dump
pub mod node;
