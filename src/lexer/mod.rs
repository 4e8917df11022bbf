//! Token input for the parser.
//!
//! Tokens arrive already classified from an external tokenizer, written one
//! per line as `KIND, VALUE`. This module handles:
//!
//! - The closed set of token kinds the grammar understands
//! - Mapping kind names from token files onto that set
//! - Loading token files, skipping lines that do not have the `KIND, VALUE` shape
//! - Token position tracking for error reporting

pub mod loader;
pub mod tokens;
