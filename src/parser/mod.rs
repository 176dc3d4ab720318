mod error;
pub mod formatter;

use crate::lexer::Lexer;
use crate::token::{Location, Token, TokenKind};
pub use error::{ParserError, ParserErrorKind};

pub type TokenLine = Vec<Token>;

pub fn parse<I, S>(lines: I) -> Result<Vec<TokenLine>, ParserError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut program = Vec::new();
    for (index, line) in lines.into_iter().enumerate() {
        let line_number = (index + 1) as u32;
        let tokens = Lexer::new(line.as_ref(), line_number).tokenize()?;
        if is_terminator(&tokens) {
            tracing::debug!(lines = program.len(), "parsed program");
            return Ok(program);
        }
        LineParser::new(&tokens, line_number).parse_line()?;
        program.push(tokens);
    }

    Err(ParserError {
        kind: ParserErrorKind::MissingTerminator,
        location: Location::new((program.len() + 1) as u32, 1),
    })
}

fn is_terminator(tokens: &[Token]) -> bool {
    matches!(tokens, [token] if token.kind == TokenKind::Dot)
}

pub fn statement_start(tokens: &[Token]) -> usize {
    match tokens {
        [label, colon, ..] if label.kind == TokenKind::Ident && colon.kind == TokenKind::Colon => 2,
        _ => 0,
    }
}

struct LineParser<'t> {
    tokens: &'t [Token],
    position: usize,
    line: u32,
}

impl<'t> LineParser<'t> {
    fn new(tokens: &'t [Token], line: u32) -> Self {
        Self {
            tokens,
            position: 0,
            line,
        }
    }

    fn peek(&self) -> Option<&'t Token> {
        self.tokens.get(self.position)
    }

    fn next_token(&mut self) -> Option<&'t Token> {
        let token = self.peek()?;
        self.position += 1;
        Some(token)
    }

    fn end_of_line(&self) -> Location {
        match self.tokens.last() {
            Some(last) => Location::new(self.line, last.column_range().end as u32 + 1),
            None => Location::new(self.line, 1),
        }
    }

    fn expect(
        &mut self,
        accept: impl Fn(TokenKind) -> bool,
        expected: &'static str,
    ) -> Result<&'t Token, ParserError> {
        let Some(next_token) = self.next_token() else {
            return Err(ParserError {
                kind: ParserErrorKind::UnexpectedEndOfLine { expected },
                location: self.end_of_line(),
            });
        };
        if accept(next_token.kind) {
            Ok(next_token)
        } else {
            Err(ParserError {
                kind: ParserErrorKind::UnexpectedToken {
                    actual: next_token.kind,
                    expected,
                },
                location: next_token.location,
            })
        }
    }

    fn eat_if(&mut self, kind: TokenKind) -> Option<&'t Token> {
        match self.peek() {
            Some(token) if token.kind == kind => self.next_token(),
            _ => None,
        }
    }

    fn expect_variable(&mut self) -> Result<&'t Token, ParserError> {
        self.expect(|kind| kind == TokenKind::Ident, "a variable name")
    }

    fn expect_value(&mut self) -> Result<&'t Token, ParserError> {
        self.expect(|kind| kind.is_value(), "a literal or variable")
    }

    fn expect_target(&mut self) -> Result<&'t Token, ParserError> {
        self.expect(
            |kind| {
                matches!(
                    kind,
                    TokenKind::IntegerLiteral | TokenKind::StringLiteral | TokenKind::Ident
                )
            },
            "an integer, string or variable jump target",
        )
    }

    fn parse_line(mut self) -> Result<(), ParserError> {
        self.position = statement_start(self.tokens);
        let keyword = self.expect(|kind| kind.is_keyword(), "a statement")?;
        match keyword.kind {
            TokenKind::KeywordLet
            | TokenKind::KeywordAdd
            | TokenKind::KeywordSub
            | TokenKind::KeywordMult
            | TokenKind::KeywordDiv => {
                self.expect_variable()?;
                self.expect_value()?;
            }
            TokenKind::KeywordPrint => {
                self.expect_value()?;
            }
            TokenKind::KeywordInstr | TokenKind::KeywordInnum => {
                self.expect_variable()?;
            }
            TokenKind::KeywordGoto | TokenKind::KeywordGosub => {
                self.expect_target()?;
                if self.eat_if(TokenKind::KeywordIf).is_some() {
                    self.expect_value()?;
                    self.expect(|kind| kind.is_comparison(), "a comparison operator")?;
                    self.expect_value()?;
                }
            }
            TokenKind::KeywordReturn | TokenKind::KeywordEnd => {}
            actual => {
                return Err(ParserError {
                    kind: ParserErrorKind::UnexpectedToken {
                        actual,
                        expected: "a statement",
                    },
                    location: keyword.location,
                });
            }
        }

        match self.next_token() {
            Some(extra) => Err(ParserError {
                kind: ParserErrorKind::TrailingToken(extra.kind),
                location: extra.location,
            }),
            None => Ok(()),
        }
    }
}
