use super::error::ExecutionError;
use crate::source::{ReportRenderer, SourceText};
use crate::value::error::RuntimeErrorKind;

pub trait ErrorFormatter {
    fn format_error(&self, error: &ExecutionError) -> String;
}

pub struct BasicFormatter;

impl ErrorFormatter for BasicFormatter {
    fn format_error(&self, error: &ExecutionError) -> String {
        format!("{error}")
    }
}

pub struct DebugFormatter;

impl ErrorFormatter for DebugFormatter {
    fn format_error(&self, error: &ExecutionError) -> String {
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

    fn describe(error: &ExecutionError) -> String {
        let ExecutionError::Runtime(error) = error else {
            return "This line cannot be executed".into();
        };
        match &error.kind {
            RuntimeErrorKind::InvalidOperands { lhs, rhs, .. } => {
                format!("Cannot combine a {lhs} with a {rhs}")
            }
            RuntimeErrorKind::InvalidComparison { lhs, rhs } => {
                format!("Cannot compare a {lhs} with a {rhs}")
            }
            RuntimeErrorKind::NegativeRepetition(count) => {
                format!("A string cannot be repeated {count} times")
            }
            RuntimeErrorKind::RepetitionTooLarge(_) => {
                "The repeated string does not fit in memory".into()
            }
            RuntimeErrorKind::DivisionByZero => "The divisor is zero".into(),
            RuntimeErrorKind::IntegerOverflow(_) => "The result does not fit in 64 bits".into(),
            RuntimeErrorKind::ZeroJump(_) | RuntimeErrorKind::SelfJump => {
                "This jump would loop on itself".into()
            }
            RuntimeErrorKind::JumpOutOfRange { line_count, .. } => {
                format!("Jumps must land within the {line_count} lines or just past the end")
            }
            RuntimeErrorKind::UnknownLabel(label) => format!("No line is labelled {label}"),
            RuntimeErrorKind::InvalidTargetType(kind) => {
                format!("A {kind} cannot be used as a jump target")
            }
            RuntimeErrorKind::ReturnWithoutGosub => "No GOSUB is waiting for this RETURN".into(),
            RuntimeErrorKind::InvalidNumericInput(_) => "This line expected a number".into(),
            RuntimeErrorKind::StepLimitExceeded(_) => "Execution stopped here".into(),
        }
    }
}

impl<'src> ErrorFormatter for PrettyFormatter<'src> {
    fn format_error(&self, error: &ExecutionError) -> String {
        let renderer = ReportRenderer {
            path: self.path,
            source: &self.source,
            color: self.color,
        };
        let message = match error {
            ExecutionError::Statement(error) => error.kind.to_string(),
            ExecutionError::Runtime(error) => error.kind.to_string(),
        };
        let range = self.source.line_range(error.line());
        renderer.render(error.code(), &message, range, &Self::describe(error))
    }
}
