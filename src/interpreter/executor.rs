use super::input::parse_numeric_input;
use super::jump::resolve_jump_target;
use super::state::ProgramState;
use super::SystemContext;
use crate::statement::{Condition, Jump, Statement, Update};
use crate::token::Token;
use crate::value::error::RuntimeErrorKind;
use crate::value::operator::ArithmeticOperator;
use crate::value::GrinValue;

pub struct StatementInterpreter;

impl StatementInterpreter {
    pub fn create() -> Self {
        Self {}
    }

    pub fn interpret_statement<C: SystemContext>(
        &self,
        statement: &Statement,
        state: &mut ProgramState<'_>,
        context: &mut C,
    ) -> Result<(), RuntimeErrorKind> {
        match statement {
            Statement::Let { variable, value } => self.interpret_let(state, variable, value),
            Statement::Print { value } => self.interpret_print(state, context, value),
            Statement::Instr { variable } => self.interpret_instr(state, context, variable),
            Statement::Innum { variable } => self.interpret_innum(state, context, variable),
            Statement::Add(update) => self.interpret_update(state, ArithmeticOperator::Add, update),
            Statement::Sub(update) => {
                self.interpret_update(state, ArithmeticOperator::Subtract, update)
            }
            Statement::Mult(update) => {
                self.interpret_update(state, ArithmeticOperator::Multiply, update)
            }
            Statement::Div(update) => {
                self.interpret_update(state, ArithmeticOperator::Divide, update)
            }
            Statement::Goto(jump) => self.interpret_goto(state, jump),
            Statement::GoSub(jump) => self.interpret_gosub(state, jump),
            Statement::Return => self.interpret_return(state),
            Statement::End => {
                state.terminate();
                Ok(())
            }
        }
    }

    fn interpret_let(
        &self,
        state: &mut ProgramState<'_>,
        variable: &Token,
        value: &Token,
    ) -> Result<(), RuntimeErrorKind> {
        let value = state.value_of(value);
        state.assign(variable.text(), value);
        state.advance();
        Ok(())
    }

    fn interpret_print<C: SystemContext>(
        &self,
        state: &mut ProgramState<'_>,
        context: &mut C,
        value: &Token,
    ) -> Result<(), RuntimeErrorKind> {
        let value = state.value_of(value);
        context.writeln(&value.to_string());
        state.advance();
        Ok(())
    }

    fn interpret_instr<C: SystemContext>(
        &self,
        state: &mut ProgramState<'_>,
        context: &mut C,
        variable: &Token,
    ) -> Result<(), RuntimeErrorKind> {
        let line = context.readln();
        state.assign(variable.text(), GrinValue::String(line.into()));
        state.advance();
        Ok(())
    }

    fn interpret_innum<C: SystemContext>(
        &self,
        state: &mut ProgramState<'_>,
        context: &mut C,
        variable: &Token,
    ) -> Result<(), RuntimeErrorKind> {
        let value = parse_numeric_input(&context.readln())?;
        state.assign(variable.text(), value);
        state.advance();
        Ok(())
    }

    fn interpret_update(
        &self,
        state: &mut ProgramState<'_>,
        operator: ArithmeticOperator,
        update: &Update,
    ) -> Result<(), RuntimeErrorKind> {
        let name = update.variable.text();
        let current = state.variable(name);
        let operand = state.value_of(&update.value);
        let result = current.apply(operator, &operand)?;
        state.assign(name, result);
        state.advance();
        Ok(())
    }

    fn condition_holds(
        &self,
        state: &ProgramState<'_>,
        condition: Option<&Condition>,
    ) -> Result<bool, RuntimeErrorKind> {
        let Some(condition) = condition else {
            return Ok(true);
        };
        let left = state.value_of(&condition.left);
        let right = state.value_of(&condition.right);
        left.compare(condition.operator, &right)
    }

    fn interpret_goto(
        &self,
        state: &mut ProgramState<'_>,
        jump: &Jump,
    ) -> Result<(), RuntimeErrorKind> {
        if self.condition_holds(state, jump.condition.as_ref())? {
            let destination = resolve_jump_target(state, &jump.target, "GOTO")?;
            state.jump_to(destination);
        } else {
            state.advance();
        }
        Ok(())
    }

    fn interpret_gosub(
        &self,
        state: &mut ProgramState<'_>,
        jump: &Jump,
    ) -> Result<(), RuntimeErrorKind> {
        if self.condition_holds(state, jump.condition.as_ref())? {
            let destination = resolve_jump_target(state, &jump.target, "GOSUB")?;
            state.push_return(state.ip() + 1);
            state.jump_to(destination);
        } else {
            state.advance();
        }
        Ok(())
    }

    fn interpret_return(&self, state: &mut ProgramState<'_>) -> Result<(), RuntimeErrorKind> {
        let address = state.pop_return()?;
        state.jump_to(address);
        Ok(())
    }
}
