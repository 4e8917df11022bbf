use std::fmt::Display;

use thiserror::Error;

use crate::Position;

/// A fatal error raised while loading tokens or parsing them.
///
/// Parsing is fail-fast: the first error aborts the run and no partial tree is returned.
#[derive(Debug, Clone)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_internal_error(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_kind(&self) -> ErrorKind {
        match &self.internal_error {
            ErrorImpl::UnexpectedToken { .. }
            | ErrorImpl::UnexpectedEndOfInput { .. }
            | ErrorImpl::ExpectedVariableDefinition { .. }
            | ErrorImpl::MismatchedBlockDelimiters { .. } => ErrorKind::Syntax,
            ErrorImpl::FunctionAlreadyDefined { .. }
            | ErrorImpl::ParameterAlreadyDefined { .. }
            | ErrorImpl::VariableAlreadyDefined { .. }
            | ErrorImpl::VariableNotDefined { .. } => ErrorKind::Semantic,
            ErrorImpl::UnreadableFile { .. } => ErrorKind::Input,
        }
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::UnexpectedEndOfInput { .. } => "UnexpectedEndOfInput",
            ErrorImpl::ExpectedVariableDefinition { .. } => "ExpectedVariableDefinition",
            ErrorImpl::MismatchedBlockDelimiters { .. } => "MismatchedBlockDelimiters",
            ErrorImpl::FunctionAlreadyDefined { .. } => "FunctionAlreadyDefined",
            ErrorImpl::ParameterAlreadyDefined { .. } => "ParameterAlreadyDefined",
            ErrorImpl::VariableAlreadyDefined { .. } => "VariableAlreadyDefined",
            ErrorImpl::VariableNotDefined { .. } => "VariableNotDefined",
            ErrorImpl::UnreadableFile { .. } => "UnreadableFile",
        }
    }

    /// The identifier or token text the error is about, if any.
    pub fn get_subject(&self) -> Option<&str> {
        match &self.internal_error {
            ErrorImpl::UnexpectedToken { token, .. } => Some(token.as_str()),
            ErrorImpl::ExpectedVariableDefinition { token } => Some(token.as_str()),
            ErrorImpl::FunctionAlreadyDefined { function } => Some(function.as_str()),
            ErrorImpl::ParameterAlreadyDefined { parameter } => Some(parameter.as_str()),
            ErrorImpl::VariableAlreadyDefined { variable } => Some(variable.as_str()),
            ErrorImpl::VariableNotDefined { variable } => Some(variable.as_str()),
            ErrorImpl::UnreadableFile { path, .. } => Some(path.as_str()),
            ErrorImpl::UnexpectedEndOfInput { .. }
            | ErrorImpl::MismatchedBlockDelimiters { .. } => None,
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnexpectedToken { expected, .. } => {
                ErrorTip::Suggestion(format!("Expected a `{}` token here", expected))
            }
            ErrorImpl::UnexpectedEndOfInput { expected } => ErrorTip::Suggestion(format!(
                "Token stream ended while expecting `{}`, is PROGRAM_END missing?",
                expected
            )),
            ErrorImpl::ExpectedVariableDefinition { .. } => ErrorTip::Suggestion(String::from(
                "A for loop must start with a variable definition",
            )),
            ErrorImpl::MismatchedBlockDelimiters { balance } => ErrorTip::Suggestion(format!(
                "{} block(s) left unbalanced",
                balance
            )),
            ErrorImpl::FunctionAlreadyDefined { function } => ErrorTip::Suggestion(format!(
                "Function `{}` already defined, function names are global",
                function
            )),
            ErrorImpl::ParameterAlreadyDefined { parameter } => ErrorTip::Suggestion(format!(
                "Parameter `{}` appears twice in the parameter list",
                parameter
            )),
            ErrorImpl::VariableAlreadyDefined { variable } => ErrorTip::Suggestion(format!(
                "Variable `{}` already defined in this block, shadow it in a nested block instead",
                variable
            )),
            ErrorImpl::VariableNotDefined { variable } => ErrorTip::Suggestion(format!(
                "Variable `{}` not defined, declare it before use",
                variable
            )),
            ErrorImpl::UnreadableFile { .. } => ErrorTip::None,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} error: {}", self.get_error_kind(), self.internal_error)
    }
}

impl std::error::Error for Error {}

/// Broad category of an [`Error`].
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ErrorKind {
    /// The token stream does not follow the grammar.
    Syntax,
    /// The token stream is well formed but breaks a naming rule.
    Semantic,
    /// A token or tree file could not be read or written.
    Input,
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorKind::Syntax => write!(f, "Syntax"),
            ErrorKind::Semantic => write!(f, "Semantic"),
            ErrorKind::Input => write!(f, "Input"),
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("Unexpected token: {token}, expected: {expected}.")]
    UnexpectedToken { token: String, expected: String },
    #[error("Unexpected end of input, expected: {expected}.")]
    UnexpectedEndOfInput { expected: String },
    #[error("Expected variable definition, found {token}.")]
    ExpectedVariableDefinition { token: String },
    #[error("Mismatched block delimiters.")]
    MismatchedBlockDelimiters { balance: i32 },
    #[error("Function '{function}' is already defined.")]
    FunctionAlreadyDefined { function: String },
    #[error("Parameter '{parameter}' is already defined.")]
    ParameterAlreadyDefined { parameter: String },
    #[error("Variable '{variable}' is already defined in the current scope.")]
    VariableAlreadyDefined { variable: String },
    #[error("Variable '{variable}' is not defined.")]
    VariableNotDefined { variable: String },
    #[error("could not access {path}: {message}")]
    UnreadableFile { path: String, message: String },
}
