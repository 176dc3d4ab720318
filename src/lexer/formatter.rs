use super::{LexicalError, LexicalErrorKind};
use crate::token::Token;
use crate::value::formatter::format_verbose;

/// Interface for creating new token formatters.
pub trait TokenFormatter {
    /// Formats a token into a string.
    fn format(&self, token: &Token) -> String;
    /// Formats a lexer error into a string.
    fn format_lexical_error(&self, error: &LexicalError) -> String;
}

pub struct BasicFormatter;

impl TokenFormatter for BasicFormatter {
    fn format(&self, token: &Token) -> String {
        let value = match token.value() {
            Some(value) => format_verbose(value),
            None => "null".into(),
        };
        format!(
            "({}) {} {} {value}",
            token.location, token.kind, token.text
        )
    }

    fn format_lexical_error(&self, error: &LexicalError) -> String {
        let location = error.location;
        match error.kind {
            LexicalErrorKind::Unrecognized(c) => {
                format!("({location}) Error: Unexpected character: {c}")
            }
            LexicalErrorKind::UnclosedString => {
                format!("({location}) Error: Unterminated string.")
            }
            LexicalErrorKind::IntegerOutOfRange(ref lexeme) => {
                format!("({location}) Error: Integer literal out of range: {lexeme}")
            }
        }
    }
}

pub struct DebugFormatter;

impl TokenFormatter for DebugFormatter {
    fn format(&self, token: &Token) -> String {
        format!("{token:?}")
    }

    fn format_lexical_error(&self, error: &LexicalError) -> String {
        format!("{error:?}")
    }
}
