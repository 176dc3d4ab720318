use crate::statement::StatementError;
use crate::value::error::RuntimeError;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ExecutionError {
    #[error(transparent)]
    Statement(#[from] StatementError),
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

impl ExecutionError {
    pub fn line(&self) -> usize {
        match self {
            ExecutionError::Statement(error) => error.line,
            ExecutionError::Runtime(error) => error.line,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            ExecutionError::Statement(_) => "ST001",
            ExecutionError::Runtime(error) => error.code(),
        }
    }
}
