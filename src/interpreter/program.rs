use super::labels::LabelTable;
use crate::parser::TokenLine;
use crate::statement::{Statement, StatementError};

#[derive(Debug, Clone)]
pub struct Program {
    statements: Vec<Statement>,
    labels: LabelTable,
}

impl Program {
    pub fn build(token_lines: &[TokenLine]) -> Result<Self, StatementError> {
        let statements = token_lines
            .iter()
            .enumerate()
            .map(|(index, tokens)| Statement::build(tokens, index + 1))
            .collect::<Result<Vec<_>, _>>()?;
        let labels = LabelTable::build(token_lines);
        tracing::debug!(
            lines = statements.len(),
            labels = labels.len(),
            "built program"
        );
        Ok(Self { statements, labels })
    }

    pub fn statement(&self, index: usize) -> Option<&Statement> {
        self.statements.get(index)
    }

    pub fn line_count(&self) -> usize {
        self.statements.len()
    }

    pub fn labels(&self) -> &LabelTable {
        &self.labels
    }
}
