use crate::token::TokenKind;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum StatementErrorKind {
    #[error("Expected a statement but the line is empty.")]
    Empty,
    #[error("Unsupported statement {0}.")]
    Unsupported(TokenKind),
    #[error("{keyword} is missing {expected}.")]
    MissingOperand {
        keyword: TokenKind,
        expected: &'static str,
    },
    #[error("{keyword} expected {expected} but got {actual}.")]
    InvalidOperand {
        keyword: TokenKind,
        actual: TokenKind,
        expected: &'static str,
    },
    #[error("Unexpected trailing token {0}.")]
    TrailingToken(TokenKind),
}

#[derive(Debug, Error, Clone, PartialEq)]
#[error("[line {line}] {kind}")]
pub struct StatementError {
    #[source]
    pub kind: StatementErrorKind,
    pub line: usize,
}
