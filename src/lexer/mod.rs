mod cursor;
mod error;
pub mod formatter;

use crate::token::{Location, Token, TokenKind, KEYWORD_HASHMAP};
use crate::value::GrinValue;
use cursor::SourceChar;
pub use error::{LexicalError, LexicalErrorKind};
use std::str::CharIndices;

#[derive(Debug)]
pub struct Lexer<'src> {
    source: &'src str,
    chars: CharIndices<'src>,
    line: u32,
    column: u32,
    lookahead: Option<SourceChar>,
}

impl<'src> Lexer<'src> {
    pub fn new(source: &'src str, line: u32) -> Self {
        Self {
            source,
            chars: source.char_indices(),
            line,
            column: 0,
            lookahead: None,
        }
    }

    pub fn tokenize(self) -> Result<Vec<Token>, LexicalError> {
        self.collect()
    }
}

impl<'src> Lexer<'src> {
    fn next_char(&mut self) -> Option<SourceChar> {
        if let Some(lookahead) = self.lookahead.take() {
            return Some(lookahead);
        }
        let (offset, value) = self.chars.next()?;
        self.column += 1;
        Some(SourceChar {
            value,
            offset,
            column: self.column,
        })
    }

    fn put_back_char(&mut self, c: SourceChar) {
        self.lookahead = Some(c);
    }

    fn peek_char(&mut self) -> Option<SourceChar> {
        let c = self.next_char()?;
        self.put_back_char(c);
        Some(c)
    }

    fn consume_while(&mut self, mut end: usize, predicate: impl Fn(char) -> bool) -> usize {
        while let Some(c) = self.next_char() {
            if !predicate(c.value) {
                self.put_back_char(c);
                break;
            }
            end = c.next_offset();
        }
        end
    }

    fn location(&self, start: &SourceChar) -> Location {
        Location::new(self.line, start.column)
    }

    fn error(&self, kind: LexicalErrorKind, start: &SourceChar) -> LexicalError {
        LexicalError {
            kind,
            location: self.location(start),
        }
    }

    pub fn next_token(&mut self) -> Option<Result<Token, LexicalError>> {
        let start = loop {
            let c = self.next_char()?;
            if !c.value.is_whitespace() {
                break c;
            }
        };

        let token_or_error = match start.value {
            ':' => Ok(self.lex_single(TokenKind::Colon, &start)),
            '.' => Ok(self.lex_single(TokenKind::Dot, &start)),
            '=' => Ok(self.lex_single(TokenKind::Equal, &start)),
            '<' => Ok(self.lex_less_than(&start)),
            '>' => Ok(self.lex_greater_than(&start)),
            '"' => self.lex_string(&start),
            '-' | '0'..='9' => self.lex_number(&start),
            'a'..='z' | 'A'..='Z' => Ok(self.lex_ident_or_keyword(&start)),
            c => Err(self.error(LexicalErrorKind::Unrecognized(c), &start)),
        };
        Some(token_or_error)
    }

    fn lex_single(&self, kind: TokenKind, start: &SourceChar) -> Token {
        let lexeme = &self.source[start.offset..start.next_offset()];
        Token::new(kind, lexeme, self.location(start))
    }

    fn lex_less_than(&mut self, start: &SourceChar) -> Token {
        let kind = match self.peek_char().map(|c| c.value) {
            Some('=') => TokenKind::LessThanEqual,
            Some('>') => TokenKind::NotEqual,
            _ => return self.lex_single(TokenKind::LessThan, start),
        };
        let second = self.next_char().expect("Just peeked.");
        let lexeme = &self.source[start.offset..second.next_offset()];
        Token::new(kind, lexeme, self.location(start))
    }

    fn lex_greater_than(&mut self, start: &SourceChar) -> Token {
        match self.peek_char() {
            Some(c) if c.value == '=' => {
                let second = self.next_char().expect("Just peeked.");
                let lexeme = &self.source[start.offset..second.next_offset()];
                Token::new(TokenKind::GreaterThanEqual, lexeme, self.location(start))
            }
            _ => self.lex_single(TokenKind::GreaterThan, start),
        }
    }

    fn lex_string(&mut self, start: &SourceChar) -> Result<Token, LexicalError> {
        let body_start = start.next_offset();
        let body_end = self.consume_while(body_start, |c| c != '"');
        match self.next_char() {
            Some(quote) => {
                let lexeme = &self.source[start.offset..quote.next_offset()];
                let value = GrinValue::from(&self.source[body_start..body_end]);
                Ok(Token::literal(
                    TokenKind::StringLiteral,
                    lexeme,
                    value,
                    self.location(start),
                ))
            }
            None => Err(self.error(LexicalErrorKind::UnclosedString, start)),
        }
    }

    fn lex_number(&mut self, start: &SourceChar) -> Result<Token, LexicalError> {
        let digits_start = start.next_offset();
        let mut end = digits_start;
        if start.value == '-' {
            match self.peek_char() {
                Some(c) if c.value.is_ascii_digit() => {}
                _ => return Err(self.error(LexicalErrorKind::Unrecognized('-'), start)),
            }
        }
        end = self.consume_while(end, |c| c.is_ascii_digit());

        let is_float = match self.peek_char() {
            Some(dot) if dot.value == '.' => {
                let _ = self.next_char();
                end = self.consume_while(dot.next_offset(), |c| c.is_ascii_digit());
                true
            }
            _ => false,
        };

        let lexeme = &self.source[start.offset..end];
        let location = self.location(start);
        if is_float {
            let value: f64 = lexeme
                .parse()
                .expect("Float literals are guaranteed to be parseable into f64.");
            Ok(Token::literal(
                TokenKind::FloatLiteral,
                lexeme,
                GrinValue::Float(value),
                location,
            ))
        } else {
            let value: i64 = lexeme.parse().map_err(|_| LexicalError {
                kind: LexicalErrorKind::IntegerOutOfRange(lexeme.to_string()),
                location,
            })?;
            Ok(Token::literal(
                TokenKind::IntegerLiteral,
                lexeme,
                GrinValue::Integer(value),
                location,
            ))
        }
    }

    fn lex_ident_or_keyword(&mut self, start: &SourceChar) -> Token {
        let end = self.consume_while(start.next_offset(), |c| {
            c.is_ascii_alphanumeric() || c == '_'
        });
        let lexeme = &self.source[start.offset..end];
        let kind = KEYWORD_HASHMAP
            .get(lexeme)
            .cloned()
            .unwrap_or(TokenKind::Ident);
        Token::new(kind, lexeme, self.location(start))
    }
}

impl<'src> Iterator for Lexer<'src> {
    type Item = Result<Token, LexicalError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token()
    }
}
