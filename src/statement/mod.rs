mod error;

use crate::parser::statement_start;
use crate::token::{Token, TokenKind};
use crate::value::operator::ComparisonOperator;
pub use error::{StatementError, StatementErrorKind};

#[derive(Debug, Clone, PartialEq)]
pub struct Update {
    pub variable: Token,
    pub value: Token,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Condition {
    pub left: Token,
    pub operator: ComparisonOperator,
    pub right: Token,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Jump {
    pub target: Token,
    pub condition: Option<Condition>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Let { variable: Token, value: Token },
    Print { value: Token },
    Instr { variable: Token },
    Innum { variable: Token },
    Add(Update),
    Sub(Update),
    Mult(Update),
    Div(Update),
    Goto(Jump),
    GoSub(Jump),
    Return,
    End,
}

impl Statement {
    pub fn build(tokens: &[Token], line: usize) -> Result<Statement, StatementError> {
        let tokens = &tokens[statement_start(tokens)..];
        let Some((keyword, operands)) = tokens.split_first() else {
            return Err(StatementError {
                kind: StatementErrorKind::Empty,
                line,
            });
        };

        let mut operands = Operands {
            keyword: keyword.kind,
            tokens: operands.iter(),
            line,
        };
        let statement = match keyword.kind {
            TokenKind::KeywordLet => Statement::Let {
                variable: operands.variable()?,
                value: operands.value()?,
            },
            TokenKind::KeywordPrint => Statement::Print {
                value: operands.value()?,
            },
            TokenKind::KeywordInstr => Statement::Instr {
                variable: operands.variable()?,
            },
            TokenKind::KeywordInnum => Statement::Innum {
                variable: operands.variable()?,
            },
            TokenKind::KeywordAdd => Statement::Add(operands.update()?),
            TokenKind::KeywordSub => Statement::Sub(operands.update()?),
            TokenKind::KeywordMult => Statement::Mult(operands.update()?),
            TokenKind::KeywordDiv => Statement::Div(operands.update()?),
            TokenKind::KeywordGoto => Statement::Goto(operands.jump()?),
            TokenKind::KeywordGosub => Statement::GoSub(operands.jump()?),
            TokenKind::KeywordReturn => Statement::Return,
            TokenKind::KeywordEnd => Statement::End,
            kind => {
                return Err(StatementError {
                    kind: StatementErrorKind::Unsupported(kind),
                    line,
                })
            }
        };
        operands.finish()?;
        Ok(statement)
    }

    pub fn keyword(&self) -> &'static str {
        match self {
            Statement::Let { .. } => "LET",
            Statement::Print { .. } => "PRINT",
            Statement::Instr { .. } => "INSTR",
            Statement::Innum { .. } => "INNUM",
            Statement::Add(_) => "ADD",
            Statement::Sub(_) => "SUB",
            Statement::Mult(_) => "MULT",
            Statement::Div(_) => "DIV",
            Statement::Goto(_) => "GOTO",
            Statement::GoSub(_) => "GOSUB",
            Statement::Return => "RETURN",
            Statement::End => "END",
        }
    }
}

struct Operands<'t> {
    keyword: TokenKind,
    tokens: std::slice::Iter<'t, Token>,
    line: usize,
}

impl<'t> Operands<'t> {
    fn error(&self, kind: StatementErrorKind) -> StatementError {
        StatementError {
            kind,
            line: self.line,
        }
    }

    fn expect(
        &mut self,
        accept: impl Fn(TokenKind) -> bool,
        expected: &'static str,
    ) -> Result<&'t Token, StatementError> {
        let keyword = self.keyword;
        match self.tokens.next() {
            Some(token) if accept(token.kind) => Ok(token),
            Some(token) => Err(self.error(StatementErrorKind::InvalidOperand {
                keyword,
                actual: token.kind,
                expected,
            })),
            None => Err(self.error(StatementErrorKind::MissingOperand { keyword, expected })),
        }
    }

    fn variable(&mut self) -> Result<Token, StatementError> {
        self.expect(|kind| kind == TokenKind::Ident, "a variable name")
            .cloned()
    }

    fn value(&mut self) -> Result<Token, StatementError> {
        self.expect(|kind| kind.is_value(), "a literal or variable")
            .cloned()
    }

    fn update(&mut self) -> Result<Update, StatementError> {
        Ok(Update {
            variable: self.variable()?,
            value: self.value()?,
        })
    }

    fn jump(&mut self) -> Result<Jump, StatementError> {
        // Target kinds are checked when the jump executes.
        let target = self.expect(|_| true, "a jump target")?.clone();
        let condition = match self.tokens.as_slice().first() {
            Some(token) if token.kind == TokenKind::KeywordIf => {
                let _ = self.tokens.next();
                let left = self.value()?;
                let operator = self.expect(|kind| kind.is_comparison(), "a comparison operator")?;
                let operator = ComparisonOperator::from_token_kind(operator.kind)
                    .expect("Comparison tokens always map to an operator.");
                let right = self.value()?;
                Some(Condition {
                    left,
                    operator,
                    right,
                })
            }
            _ => None,
        };
        Ok(Jump { target, condition })
    }

    fn finish(mut self) -> Result<(), StatementError> {
        match self.tokens.next() {
            Some(token) => Err(self.error(StatementErrorKind::TrailingToken(token.kind))),
            None => Ok(()),
        }
    }
}
