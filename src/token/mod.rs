use crate::value::GrinValue;
use compact_str::CompactString;
use std::collections::HashMap;
use std::fmt::Display;
use std::ops::Range;
use std::sync::LazyLock;

/// The hashmap for keywords
pub static KEYWORD_HASHMAP: LazyLock<HashMap<&'static str, TokenKind>> = LazyLock::new(|| {
    let mut map = HashMap::new();
    map.insert("ADD", TokenKind::KeywordAdd);
    map.insert("DIV", TokenKind::KeywordDiv);
    map.insert("END", TokenKind::KeywordEnd);
    map.insert("GOSUB", TokenKind::KeywordGosub);
    map.insert("GOTO", TokenKind::KeywordGoto);
    map.insert("IF", TokenKind::KeywordIf);
    map.insert("INNUM", TokenKind::KeywordInnum);
    map.insert("INSTR", TokenKind::KeywordInstr);
    map.insert("LET", TokenKind::KeywordLet);
    map.insert("MULT", TokenKind::KeywordMult);
    map.insert("PRINT", TokenKind::KeywordPrint);
    map.insert("RETURN", TokenKind::KeywordReturn);
    map.insert("SUB", TokenKind::KeywordSub);
    map
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Location {
    pub line: u32,
    pub column: u32,
}

impl Location {
    pub const fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }
}

impl Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Punctuation
    Colon,
    Dot,
    // Comparison operators
    Equal,
    NotEqual,
    LessThan,
    LessThanEqual,
    GreaterThan,
    GreaterThanEqual,

    // Literals
    IntegerLiteral,
    FloatLiteral,
    StringLiteral,
    Ident,

    // Keywords
    KeywordAdd,
    KeywordDiv,
    KeywordEnd,
    KeywordGosub,
    KeywordGoto,
    KeywordIf,
    KeywordInnum,
    KeywordInstr,
    KeywordLet,
    KeywordMult,
    KeywordPrint,
    KeywordReturn,
    KeywordSub,
}

impl TokenKind {
    pub fn is_keyword(&self) -> bool {
        matches!(
            self,
            TokenKind::KeywordAdd
                | TokenKind::KeywordDiv
                | TokenKind::KeywordEnd
                | TokenKind::KeywordGosub
                | TokenKind::KeywordGoto
                | TokenKind::KeywordIf
                | TokenKind::KeywordInnum
                | TokenKind::KeywordInstr
                | TokenKind::KeywordLet
                | TokenKind::KeywordMult
                | TokenKind::KeywordPrint
                | TokenKind::KeywordReturn
                | TokenKind::KeywordSub
        )
    }

    pub fn is_literal(&self) -> bool {
        matches!(
            self,
            TokenKind::IntegerLiteral | TokenKind::FloatLiteral | TokenKind::StringLiteral
        )
    }

    pub fn is_value(&self) -> bool {
        self.is_literal() || matches!(self, TokenKind::Ident)
    }

    pub fn is_comparison(&self) -> bool {
        matches!(
            self,
            TokenKind::Equal
                | TokenKind::NotEqual
                | TokenKind::LessThan
                | TokenKind::LessThanEqual
                | TokenKind::GreaterThan
                | TokenKind::GreaterThanEqual
        )
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenKind::Colon => write!(f, "COLON"),
            TokenKind::Dot => write!(f, "DOT"),
            TokenKind::Equal => write!(f, "EQUAL"),
            TokenKind::NotEqual => write!(f, "NOT_EQUAL"),
            TokenKind::LessThan => write!(f, "LESS"),
            TokenKind::LessThanEqual => write!(f, "LESS_EQUAL"),
            TokenKind::GreaterThan => write!(f, "GREATER"),
            TokenKind::GreaterThanEqual => write!(f, "GREATER_EQUAL"),
            TokenKind::IntegerLiteral => write!(f, "INTEGER"),
            TokenKind::FloatLiteral => write!(f, "FLOAT"),
            TokenKind::StringLiteral => write!(f, "STRING"),
            TokenKind::Ident => write!(f, "IDENTIFIER"),
            TokenKind::KeywordAdd => write!(f, "ADD"),
            TokenKind::KeywordDiv => write!(f, "DIV"),
            TokenKind::KeywordEnd => write!(f, "END"),
            TokenKind::KeywordGosub => write!(f, "GOSUB"),
            TokenKind::KeywordGoto => write!(f, "GOTO"),
            TokenKind::KeywordIf => write!(f, "IF"),
            TokenKind::KeywordInnum => write!(f, "INNUM"),
            TokenKind::KeywordInstr => write!(f, "INSTR"),
            TokenKind::KeywordLet => write!(f, "LET"),
            TokenKind::KeywordMult => write!(f, "MULT"),
            TokenKind::KeywordPrint => write!(f, "PRINT"),
            TokenKind::KeywordReturn => write!(f, "RETURN"),
            TokenKind::KeywordSub => write!(f, "SUB"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: CompactString,
    pub value: Option<GrinValue>,
    pub location: Location,
}

impl Token {
    pub fn new(kind: TokenKind, text: &str, location: Location) -> Self {
        Self {
            kind,
            text: text.into(),
            value: None,
            location,
        }
    }

    pub fn literal(kind: TokenKind, text: &str, value: GrinValue, location: Location) -> Self {
        Self {
            kind,
            text: text.into(),
            value: Some(value),
            location,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn value(&self) -> Option<&GrinValue> {
        self.value.as_ref()
    }

    pub fn column_range(&self) -> Range<usize> {
        let start = self.location.column.saturating_sub(1) as usize;
        start..start + self.text.chars().count()
    }
}
