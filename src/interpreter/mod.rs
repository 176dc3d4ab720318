pub mod config;
pub mod context;
pub mod error;
mod executor;
pub mod formatter;
mod input;
mod jump;
mod labels;
mod program;
mod state;

use crate::parser::TokenLine;
use crate::statement::StatementError;
use crate::value::error::{RuntimeError, RuntimeErrorKind};
pub use config::InterpreterConfig;
use context::FnContext;
use error::ExecutionError;
use executor::StatementInterpreter;
pub use input::parse_numeric_input;
pub use jump::resolve_jump_target;
pub use labels::LabelTable;
pub use program::Program;
pub use state::ProgramState;

pub trait SystemContext {
    fn writeln(&mut self, text: &str);
    fn readln(&mut self) -> String;
}

pub struct Interpreter {
    program: Program,
    config: InterpreterConfig,
    interpreter: StatementInterpreter,
}

impl Interpreter {
    pub fn new(token_lines: &[TokenLine]) -> Result<Self, StatementError> {
        Ok(Self {
            program: Program::build(token_lines)?,
            config: InterpreterConfig::default(),
            interpreter: StatementInterpreter::create(),
        })
    }

    pub fn with_config(mut self, config: InterpreterConfig) -> Self {
        self.config = config;
        self
    }

    pub fn program(&self) -> &Program {
        &self.program
    }

    pub fn run<C: SystemContext>(&self, context: &mut C) -> Result<(), RuntimeError> {
        let mut state = ProgramState::new(&self.program);
        while state.is_running() {
            self.step(&mut state, context)?;
        }
        tracing::debug!(steps = state.steps(), "program terminated");
        Ok(())
    }

    pub fn step<C: SystemContext>(
        &self,
        state: &mut ProgramState<'_>,
        context: &mut C,
    ) -> Result<(), RuntimeError> {
        let ip = state.ip();
        let line = ip + 1;
        let Some(statement) = state.program().statement(ip) else {
            return Ok(());
        };

        if let Some(limit) = self.config.step_limit {
            if state.steps() >= limit {
                return Err(RuntimeError {
                    kind: RuntimeErrorKind::StepLimitExceeded(limit),
                    line,
                });
            }
        }

        tracing::trace!(line, statement = statement.keyword(), "executing");
        state.count_step();
        self.interpreter
            .interpret_statement(statement, state, context)
            .map_err(|kind| {
                tracing::debug!(line, %kind, "runtime error");
                RuntimeError { kind, line }
            })
    }
}

pub fn execute<I, O>(token_lines: &[TokenLine], input: I, output: O) -> Result<(), ExecutionError>
where
    I: FnMut() -> String,
    O: FnMut(&str),
{
    execute_with_config(token_lines, input, output, InterpreterConfig::default())
}

pub fn execute_with_config<I, O>(
    token_lines: &[TokenLine],
    input: I,
    output: O,
    config: InterpreterConfig,
) -> Result<(), ExecutionError>
where
    I: FnMut() -> String,
    O: FnMut(&str),
{
    let interpreter = Interpreter::new(token_lines)?.with_config(config);
    let mut context = FnContext::new(input, output);
    interpreter.run(&mut context)?;
    Ok(())
}
