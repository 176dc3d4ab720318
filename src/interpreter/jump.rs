use super::state::ProgramState;
use crate::token::Token;
use crate::value::error::RuntimeErrorKind;
use crate::value::GrinValue;

/// Resolves the destination of a `GOTO` or `GOSUB` executing at the current
/// instruction pointer.
///
/// Integers (literal or held by a variable) are offsets relative to the
/// current line, strings name a label. The destination may be one past the
/// last line, which ends the program, but never the current line itself.
pub fn resolve_jump_target(
    state: &ProgramState<'_>,
    target: &Token,
    keyword: &'static str,
) -> Result<usize, RuntimeErrorKind> {
    if !target.kind.is_value() {
        return Err(RuntimeErrorKind::InvalidTargetType("non-value token"));
    }
    match state.value_of(target) {
        GrinValue::Integer(offset) => resolve_relative(state, offset, keyword),
        GrinValue::String(label) => resolve_label(state, &label),
        other => Err(RuntimeErrorKind::InvalidTargetType(other.type_name())),
    }
}

fn resolve_relative(
    state: &ProgramState<'_>,
    offset: i64,
    keyword: &'static str,
) -> Result<usize, RuntimeErrorKind> {
    if offset == 0 {
        return Err(RuntimeErrorKind::ZeroJump(keyword));
    }
    let line_count = state.program().line_count();
    let destination = (state.ip() as i64).saturating_add(offset);
    if destination < 0 || destination > line_count as i64 {
        return Err(RuntimeErrorKind::JumpOutOfRange {
            destination,
            line_count,
        });
    }
    checked_destination(state, destination as usize)
}

fn resolve_label(state: &ProgramState<'_>, label: &str) -> Result<usize, RuntimeErrorKind> {
    let destination = state
        .program()
        .labels()
        .get(label)
        .ok_or_else(|| RuntimeErrorKind::UnknownLabel(label.into()))?;
    checked_destination(state, destination)
}

fn checked_destination(
    state: &ProgramState<'_>,
    destination: usize,
) -> Result<usize, RuntimeErrorKind> {
    if destination == state.ip() {
        Err(RuntimeErrorKind::SelfJump)
    } else {
        Ok(destination)
    }
}
