//! Parser state and the token cursor.
//!
//! This module contains the Parser struct and the `parse` entry point.
//! The parser owns everything a run mutates:
//! - The token stream and the read cursor
//! - The block counter used to check delimiter balance
//! - The set of defined function names
//! - The stack of lexical scopes

use std::{collections::HashSet, rc::Rc};

use tracing::{debug, trace};

use crate::{
    ast::node::Node,
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
    Position,
};

use super::{scope::ScopeStack, stmt::parse_program};

/// The main parser structure that maintains parsing state.
///
/// A parser is built for one run and consumes its tokens left to right
/// without backtracking.
pub struct Parser {
    /// The list of tokens to parse
    tokens: Vec<Token>,
    /// Current position in the token stream
    pos: usize,
    /// The name of the token file being parsed
    file: Rc<String>,
    /// Opened minus closed blocks consumed so far
    block_counter: i32,
    /// Every function name defined so far; functions are never shadowed
    defined_functions: HashSet<String>,
    /// Lexical scopes, global frame at the bottom
    scopes: ScopeStack,
}

impl Parser {
    /// Creates a new Parser instance.
    ///
    /// # Arguments
    ///
    /// * `tokens` - Vector of tokens to parse
    /// * `file` - Reference-counted string containing the token file name
    pub fn new(tokens: Vec<Token>, file: Rc<String>) -> Self {
        Parser {
            tokens,
            pos: 0,
            file,
            block_counter: 0,
            defined_functions: HashSet::new(),
            scopes: ScopeStack::new(),
        }
    }

    /// Returns the current token without advancing, or `None` once the stream is exhausted.
    pub fn current_token(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    pub fn current_token_kind(&self) -> Option<TokenKind> {
        self.current_token().map(|token| token.kind)
    }

    /// Returns true if a token remains and it is not of kind `terminator`.
    pub fn has_tokens_before(&self, terminator: TokenKind) -> bool {
        matches!(self.current_token_kind(), Some(kind) if kind != terminator)
    }

    pub fn has_tokens(&self) -> bool {
        self.pos < self.tokens.len()
    }

    /// Consumes the current token without checking its kind.
    ///
    /// Only flattening productions use this; it leaves the block counter untouched.
    pub fn advance(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos).cloned();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    /// Consumes the current token if it is of `expected_kind`.
    ///
    /// Block delimiters adjust the block counter as they are consumed.
    ///
    /// # Returns
    ///
    /// Returns Ok(Token) if the current token matches, otherwise a syntax Error.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        let token = match self.current_token() {
            Some(token) => token.clone(),
            None => {
                return Err(Error::new(
                    ErrorImpl::UnexpectedEndOfInput {
                        expected: expected_kind.to_string(),
                    },
                    self.get_position(),
                ))
            }
        };

        if token.kind != expected_kind {
            return Err(Error::new(
                ErrorImpl::UnexpectedToken {
                    token: token.to_string(),
                    expected: expected_kind.to_string(),
                },
                token.position,
            ));
        }

        match expected_kind {
            TokenKind::BlockStart => self.block_counter += 1,
            TokenKind::BlockEnd => self.block_counter -= 1,
            _ => {}
        }

        trace!(token = %token, "consumed");
        self.pos += 1;
        Ok(token)
    }

    /// Records a function name, failing if it was defined before anywhere in the program.
    pub fn define_function(&mut self, name: &str, position: Position) -> Result<(), Error> {
        if !self.defined_functions.insert(name.to_string()) {
            return Err(Error::new(
                ErrorImpl::FunctionAlreadyDefined {
                    function: name.to_string(),
                },
                position,
            ));
        }

        debug!(function = name, "defined function");
        Ok(())
    }

    /// Fails with a semantic error unless `token` names a variable visible in some active scope.
    pub fn check_defined(&self, token: &Token) -> Result<(), Error> {
        if self.scopes.is_defined(&token.value) {
            Ok(())
        } else {
            Err(Error::new(
                ErrorImpl::VariableNotDefined {
                    variable: token.value.clone(),
                },
                token.position.clone(),
            ))
        }
    }

    pub fn scopes(&self) -> &ScopeStack {
        &self.scopes
    }

    pub fn scopes_mut(&mut self) -> &mut ScopeStack {
        &mut self.scopes
    }

    pub fn block_depth(&self) -> i32 {
        self.block_counter
    }

    pub fn scope_depth(&self) -> usize {
        self.scopes.depth()
    }

    pub fn defined_functions(&self) -> &HashSet<String> {
        &self.defined_functions
    }

    /// Number of tokens consumed so far.
    pub fn consumed(&self) -> usize {
        self.pos
    }

    /// Returns the position of the current token, falling back to the last
    /// token once the stream is exhausted.
    pub fn get_position(&self) -> Position {
        self.current_token()
            .or_else(|| self.tokens.last())
            .map(|token| token.position.clone())
            .unwrap_or_else(|| Position(0, Rc::clone(&self.file)))
    }
}

/// Parses a token stream into a syntax tree rooted at a `Program` node.
///
/// This is the main entry point for parsing. It creates a fresh parser and
/// runs the program production over every token.
///
/// # Arguments
///
/// * `tokens` - Vector of tokens to parse
/// * `file` - Reference-counted string containing the token file name
///
/// # Returns
///
/// A tuple containing:
/// - The Parser instance (with state after parsing)
/// - Result containing either the root Node or the first Error
pub fn parse(tokens: Vec<Token>, file: Rc<String>) -> (Parser, Result<Node, Error>) {
    let mut parser = Parser::new(tokens, file);
    let result = parse_program(&mut parser);

    (parser, result)
}
