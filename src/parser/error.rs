use crate::lexer::LexicalError;
use crate::token::{Location, TokenKind};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ParserErrorKind {
    #[error("Expected {expected} but got token {actual}.")]
    UnexpectedToken {
        actual: TokenKind,
        expected: &'static str,
    },
    #[error("Expected {expected} but the line ended.")]
    UnexpectedEndOfLine { expected: &'static str },
    #[error("Unexpected trailing token {0}.")]
    TrailingToken(TokenKind),
    #[error("Program is missing its terminating '.' line.")]
    MissingTerminator,
    #[error("Encountered a lexer error: {0}")]
    LexicalError(#[from] LexicalError),
}

#[derive(Debug, Error, Clone, PartialEq)]
#[error("[line {}] {kind}", .location.line)]
pub struct ParserError {
    #[source]
    pub kind: ParserErrorKind,
    pub location: Location,
}

impl ParserError {
    pub fn code(&self) -> &'static str {
        match self.kind {
            ParserErrorKind::UnexpectedToken { .. } => "PE001",
            ParserErrorKind::UnexpectedEndOfLine { .. } => "PE002",
            ParserErrorKind::TrailingToken(_) => "PE003",
            ParserErrorKind::MissingTerminator => "PE004",
            ParserErrorKind::LexicalError(_) => "PE005",
        }
    }
}

impl From<LexicalError> for ParserError {
    fn from(error: LexicalError) -> Self {
        Self {
            location: error.location,
            kind: ParserErrorKind::LexicalError(error),
        }
    }
}
