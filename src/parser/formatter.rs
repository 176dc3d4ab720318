use super::{ParserError, ParserErrorKind};
use crate::lexer::LexicalErrorKind;
use crate::source::{ReportRenderer, SourceText};

pub trait ParserFormatter {
    fn format_error(&self, error: &ParserError) -> String;
}

pub struct BasicFormatter;

impl ParserFormatter for BasicFormatter {
    fn format_error(&self, error: &ParserError) -> String {
        format!("{error}")
    }
}

pub struct DebugFormatter;

impl ParserFormatter for DebugFormatter {
    fn format_error(&self, error: &ParserError) -> String {
        format!("{error:?}")
    }
}

pub struct PrettyFormatter<'src> {
    path: &'src str,
    source: SourceText,
    color: bool,
}

impl<'src> PrettyFormatter<'src> {
    pub fn new<S: AsRef<str>>(path: &'src str, lines: &[S]) -> Self {
        Self {
            path,
            source: SourceText::new(lines),
            color: true,
        }
    }

    pub fn without_color(mut self) -> Self {
        self.color = false;
        self
    }
}

impl<'src> ParserFormatter for PrettyFormatter<'src> {
    fn format_error(&self, error: &ParserError) -> String {
        let renderer = ReportRenderer {
            path: self.path,
            source: &self.source,
            color: self.color,
        };
        let location = error.location;
        let (message, label, length) = match &error.kind {
            ParserErrorKind::UnexpectedToken { actual, expected } => (
                "Malformed statement".to_string(),
                format!("Expected {expected} here, found {actual}"),
                1,
            ),
            ParserErrorKind::UnexpectedEndOfLine { expected } => (
                "Incomplete statement".to_string(),
                format!("Expected {expected} after this"),
                1,
            ),
            ParserErrorKind::TrailingToken(kind) => (
                "Unexpected token after the end of a statement".to_string(),
                format!("{kind} is not part of the statement"),
                1,
            ),
            ParserErrorKind::MissingTerminator => (
                "Program is not terminated".to_string(),
                "Expected a '.' line here".to_string(),
                1,
            ),
            ParserErrorKind::LexicalError(lexical) => match &lexical.kind {
                LexicalErrorKind::Unrecognized(c) => (
                    "Unexpected character".to_string(),
                    format!("{c:?} is not valid Grin"),
                    1,
                ),
                LexicalErrorKind::UnclosedString => (
                    "Unterminated string literal".to_string(),
                    "This string is never closed".to_string(),
                    usize::MAX,
                ),
                LexicalErrorKind::IntegerOutOfRange(lexeme) => (
                    "Integer literal out of range".to_string(),
                    "Does not fit in a 64-bit integer".to_string(),
                    lexeme.chars().count(),
                ),
            },
        };
        let range = self.source.span(location, length);
        renderer.render(error.code(), &message, range, &label)
    }
}
