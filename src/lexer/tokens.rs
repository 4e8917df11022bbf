use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Position;

lazy_static! {
    pub static ref KIND_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("PROGRAM_START", TokenKind::ProgramStart);
        map.insert("PROGRAM_END", TokenKind::ProgramEnd);
        map.insert("BLOCK_START", TokenKind::BlockStart);
        map.insert("BLOCK_END", TokenKind::BlockEnd);
        map.insert("FUNCTION_DEFINITION", TokenKind::FunctionDef);
        map.insert("VARIABLE_DEFINITION", TokenKind::VariableDef);
        map.insert("IF_CONDITIONAL", TokenKind::IfConditional);
        map.insert("ELSE_CONDITIONAL", TokenKind::ElseConditional);
        map.insert("FOR_LOOP", TokenKind::ForLoop);
        map.insert("RETURN", TokenKind::Return);
        map.insert("TYPE", TokenKind::Type);
        map.insert("IDENTIFIER", TokenKind::Identifier);
        map.insert("LEFT_PAREN", TokenKind::LeftParen);
        map.insert("RIGHT_PAREN", TokenKind::RightParen);
        map.insert("START_STATEMENT", TokenKind::StartStatement);
        map.insert("COMMAND_END", TokenKind::CommandEnd);
        map.insert("ASSIGN", TokenKind::Assign);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    ProgramStart,
    ProgramEnd,
    BlockStart,
    BlockEnd,

    // Definitions
    FunctionDef,
    VariableDef,

    // Control flow
    IfConditional,
    ElseConditional,
    ForLoop,
    Return,

    Type,
    Identifier,

    LeftParen,
    RightParen,
    StartStatement, // introduces a body after a header
    CommandEnd,
    Assign,

    /// Any token kind the grammar does not name; consumed verbatim.
    Other,
}

impl TokenKind {
    /// Maps a kind name from a token file to its kind, falling back to [`TokenKind::Other`].
    pub fn from_name(name: &str) -> TokenKind {
        KIND_LOOKUP.get(name).copied().unwrap_or(TokenKind::Other)
    }

    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::ProgramStart => "PROGRAM_START",
            TokenKind::ProgramEnd => "PROGRAM_END",
            TokenKind::BlockStart => "BLOCK_START",
            TokenKind::BlockEnd => "BLOCK_END",
            TokenKind::FunctionDef => "FUNCTION_DEFINITION",
            TokenKind::VariableDef => "VARIABLE_DEFINITION",
            TokenKind::IfConditional => "IF_CONDITIONAL",
            TokenKind::ElseConditional => "ELSE_CONDITIONAL",
            TokenKind::ForLoop => "FOR_LOOP",
            TokenKind::Return => "RETURN",
            TokenKind::Type => "TYPE",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::LeftParen => "LEFT_PAREN",
            TokenKind::RightParen => "RIGHT_PAREN",
            TokenKind::StartStatement => "START_STATEMENT",
            TokenKind::CommandEnd => "COMMAND_END",
            TokenKind::Assign => "ASSIGN",
            TokenKind::Other => "OTHER",
        }
    }

    /// Kinds that end an expression run without being consumed by it.
    pub fn is_expression_terminator(&self) -> bool {
        matches!(
            self,
            TokenKind::CommandEnd | TokenKind::RightParen | TokenKind::BlockEnd
        )
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub position: Position,
}

impl Token {
    pub fn new(kind: TokenKind, value: impl Into<String>) -> Self {
        Token {
            kind,
            value: value.into(),
            position: Position::null(),
        }
    }

    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Token({}, {})", self.kind, self.value)
    }
}
