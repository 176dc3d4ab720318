pub mod interpreter;
pub mod lexer;
pub mod parser;
pub mod shell;
pub mod source;
pub mod statement;
pub mod token;
pub mod value;

pub use interpreter::error::ExecutionError;
pub use interpreter::{execute, execute_with_config, InterpreterConfig};
pub use value::GrinValue;
