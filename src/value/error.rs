use super::operator::ArithmeticOperator;
use compact_str::CompactString;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum RuntimeErrorKind {
    #[error("Invalid operand types for {operator}: {lhs} and {rhs}")]
    InvalidOperands {
        operator: ArithmeticOperator,
        lhs: &'static str,
        rhs: &'static str,
    },
    #[error("Invalid types for comparison: {lhs} and {rhs}")]
    InvalidComparison { lhs: &'static str, rhs: &'static str },
    #[error("Negative string multiplication: {0}")]
    NegativeRepetition(i64),
    #[error("String multiplication by {0} is too large")]
    RepetitionTooLarge(i64),
    #[error("Division by zero")]
    DivisionByZero,
    #[error("Integer overflow in {0}")]
    IntegerOverflow(ArithmeticOperator),
    #[error("{0} 0 not permitted")]
    ZeroJump(&'static str),
    #[error("Jump destination {destination} is outside the program of {line_count} lines")]
    JumpOutOfRange { destination: i64, line_count: usize },
    #[error("Jump to same line not permitted")]
    SelfJump,
    #[error("Unknown label: {0}")]
    UnknownLabel(CompactString),
    #[error("Invalid target type: {0}")]
    InvalidTargetType(&'static str),
    #[error("RETURN without GOSUB")]
    ReturnWithoutGosub,
    #[error("Invalid numeric input: {0:?}")]
    InvalidNumericInput(CompactString),
    #[error("Step limit of {0} exceeded")]
    StepLimitExceeded(u64),
}

#[derive(Debug, Error, Clone, PartialEq)]
#[error("[line {line}] {kind}")]
pub struct RuntimeError {
    pub kind: RuntimeErrorKind,
    pub line: usize,
}

impl RuntimeError {
    pub fn code(&self) -> &'static str {
        match self.kind {
            RuntimeErrorKind::InvalidOperands { .. } => "RT001",
            RuntimeErrorKind::InvalidComparison { .. } => "RT002",
            RuntimeErrorKind::NegativeRepetition(_) => "RT003",
            RuntimeErrorKind::DivisionByZero => "RT004",
            RuntimeErrorKind::IntegerOverflow(_) => "RT005",
            RuntimeErrorKind::ZeroJump(_) => "RT006",
            RuntimeErrorKind::JumpOutOfRange { .. } => "RT007",
            RuntimeErrorKind::SelfJump => "RT008",
            RuntimeErrorKind::UnknownLabel(_) => "RT009",
            RuntimeErrorKind::InvalidTargetType(_) => "RT010",
            RuntimeErrorKind::ReturnWithoutGosub => "RT011",
            RuntimeErrorKind::InvalidNumericInput(_) => "RT012",
            RuntimeErrorKind::StepLimitExceeded(_) => "RT013",
            RuntimeErrorKind::RepetitionTooLarge(_) => "RT014",
        }
    }
}
