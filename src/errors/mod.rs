//! Error types and error handling for the front-end.
//!
//! This module defines the single error type shared by the token loader and
//! the parser. It includes:
//!
//! - Error structures with token position information
//! - Syntax, semantic and input error variants
//! - Error formatting and display functionality
//! - Helpful error messages and suggestions

pub mod errors;
