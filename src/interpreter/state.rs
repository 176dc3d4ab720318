use super::program::Program;
use crate::token::{Token, TokenKind};
use crate::value::error::RuntimeErrorKind;
use crate::value::GrinValue;
use compact_str::CompactString;
use std::collections::HashMap;

#[derive(Debug)]
pub struct ProgramState<'p> {
    program: &'p Program,
    ip: usize,
    variables: HashMap<CompactString, GrinValue>,
    return_stack: Vec<usize>,
    steps: u64,
}

impl<'p> ProgramState<'p> {
    pub fn new(program: &'p Program) -> Self {
        Self {
            program,
            ip: 0,
            variables: HashMap::new(),
            return_stack: Vec::new(),
            steps: 0,
        }
    }

    pub fn program(&self) -> &'p Program {
        self.program
    }

    pub fn ip(&self) -> usize {
        self.ip
    }

    pub fn steps(&self) -> u64 {
        self.steps
    }

    pub fn is_running(&self) -> bool {
        self.ip < self.program.line_count()
    }

    pub fn advance(&mut self) {
        self.ip += 1;
    }

    pub fn jump_to(&mut self, destination: usize) {
        self.ip = destination;
    }

    pub fn terminate(&mut self) {
        self.ip = self.program.line_count();
    }

    pub(super) fn count_step(&mut self) {
        self.steps += 1;
    }

    pub fn variable(&self, name: &str) -> GrinValue {
        self.variables.get(name).cloned().unwrap_or_default()
    }

    pub fn assign(&mut self, name: &str, value: GrinValue) {
        self.variables.insert(name.into(), value);
    }

    pub fn value_of(&self, token: &Token) -> GrinValue {
        match token.kind {
            TokenKind::Ident => self.variable(token.text()),
            _ => token
                .value()
                .cloned()
                .expect("Only literal and identifier tokens are resolved to values."),
        }
    }

    pub fn push_return(&mut self, address: usize) {
        self.return_stack.push(address);
    }

    pub fn pop_return(&mut self) -> Result<usize, RuntimeErrorKind> {
        self.return_stack
            .pop()
            .ok_or(RuntimeErrorKind::ReturnWithoutGosub)
    }
}
