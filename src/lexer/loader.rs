use std::{fs, path::Path, rc::Rc};

use lazy_static::lazy_static;
use regex::Regex;
use tracing::{debug, trace};

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position,
};

use super::tokens::{Token, TokenKind};

lazy_static! {
    // Splits on the first ", " only; the value may contain further separators.
    static ref TOKEN_LINE: Regex = Regex::new(r"^(.*?), (.*)$").unwrap();
}

/// Reads tokens from `KIND, VALUE` lines.
///
/// Lines are trimmed first. A line without a `", "` separator is skipped, as
/// are blank lines. Unknown kind names become [`TokenKind::Other`].
pub fn read_tokens(source: &str, file: Rc<String>) -> Vec<Token> {
    let mut tokens = Vec::new();

    for (index, line) in source.lines().enumerate() {
        let line = line.trim();
        let Some(captures) = TOKEN_LINE.captures(line) else {
            if !line.is_empty() {
                trace!(line = index + 1, "skipping malformed token line");
            }
            continue;
        };

        tokens.push(Token {
            kind: TokenKind::from_name(&captures[1]),
            value: captures[2].to_string(),
            position: Position((index + 1) as u32, Rc::clone(&file)),
        });
    }

    debug!(file = %file, count = tokens.len(), "read tokens");
    tokens
}

/// Loads a token file from disk.
pub fn load_tokens(path: &Path) -> Result<Vec<Token>, Error> {
    let file_name = Rc::new(path.to_string_lossy().into_owned());

    let source = fs::read_to_string(path).map_err(|error| {
        Error::new(
            ErrorImpl::UnreadableFile {
                path: file_name.to_string(),
                message: error.to_string(),
            },
            Position::null(),
        )
    })?;

    Ok(read_tokens(&source, file_name))
}
