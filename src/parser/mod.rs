//! Parser module for building the syntax tree and checking names.
//!
//! This module contains a single-pass recursive descent parser that
//! consumes a token stream and, in the same pass:
//!
//! - Builds the syntax tree (programs, blocks, definitions, control flow)
//! - Tracks lexical scopes to reject duplicate or undefined identifiers
//! - Rejects redefinition of function names across the whole program
//! - Checks that block delimiters balance
//!
//! Expressions, loop conditions and increments are flattened into text
//! rather than parsed into sub-trees. The first error aborts the parse.

pub mod parser;
pub mod scope;
pub mod stmt;
