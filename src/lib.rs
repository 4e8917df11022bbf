#![allow(clippy::module_inception)]

use std::{fmt::Display, rc::Rc};

use crate::errors::errors::{Error, ErrorTip};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod parser;

extern crate regex;

/// Location of a token: the 1-based line it was read from and the token file name.
///
/// Line `0` means the token was built in memory and has no source line.
#[derive(Debug, Clone)]
pub struct Position(pub u32, pub Rc<String>);

impl Position {
    pub fn null() -> Self {
        Position(0, Rc::new(String::from("<null>")))
    }

    pub fn is_null(&self) -> bool {
        self.0 == 0
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.1, self.0)
    }
}

/// Formats an error the way the driver reports it.
///
/// ```text
/// Error: Semantic error: Variable 'y' is not defined.
/// -> tokens.krn:9 (Variable `y` not defined, declare it before use)
/// ```
pub fn format_error(error: &Error) -> String {
    let mut report = format!("Error: {}", error);

    let position = error.get_position();
    if !position.is_null() {
        report.push_str(&format!("\n-> {}", position));
        if let ErrorTip::Suggestion(tip) = error.get_tip() {
            report.push_str(&format!(" ({})", tip));
        }
    }

    report
}
