use grin::lexer::Lexer;
use grin::statement::{Statement, StatementErrorKind};
use grin::token::TokenKind;
use grin::value::operator::ComparisonOperator;

fn build(line: &str) -> Result<Statement, StatementErrorKind> {
    let tokens = Lexer::new(line, 1).tokenize().expect("Valid tokens");
    Statement::build(&tokens, 1).map_err(|error| error.kind)
}

#[test]
fn test_simple_statements() {
    assert_eq!(build("RETURN"), Ok(Statement::Return));
    assert_eq!(build("DONE: END"), Ok(Statement::End));

    let Ok(Statement::Let { variable, value }) = build("LET A \"x\"") else {
        panic!("Expected a LET statement");
    };
    assert_eq!(variable.text(), "A");
    assert_eq!(value.kind, TokenKind::StringLiteral);
}

#[test]
fn test_updates() {
    let Ok(Statement::Mult(update)) = build("MULT COUNT 2.5") else {
        panic!("Expected a MULT statement");
    };
    assert_eq!(update.variable.text(), "COUNT");
    assert_eq!(update.value.kind, TokenKind::FloatLiteral);
    assert_eq!(
        build("DIV A B").map(|statement| statement.keyword()),
        Ok("DIV")
    );
}

#[test]
fn test_conditional_jump() {
    let Ok(Statement::GoSub(jump)) = build("GOSUB \"SUB\" IF A >= 10") else {
        panic!("Expected a GOSUB statement");
    };
    assert_eq!(jump.target.kind, TokenKind::StringLiteral);
    let condition = jump.condition.expect("Jump has a condition");
    assert_eq!(condition.left.text(), "A");
    assert_eq!(condition.operator, ComparisonOperator::GreaterThanEqual);
    assert_eq!(condition.right.kind, TokenKind::IntegerLiteral);

    let Ok(Statement::Goto(jump)) = build("GOTO -3") else {
        panic!("Expected a GOTO statement");
    };
    assert!(jump.condition.is_none());
}

#[test]
fn test_rejections() {
    assert_eq!(build(""), Err(StatementErrorKind::Empty));
    assert_eq!(build("L:"), Err(StatementErrorKind::Empty));
    assert_eq!(
        build("FOO 1"),
        Err(StatementErrorKind::Unsupported(TokenKind::Ident))
    );
    assert_eq!(
        build("GOTO"),
        Err(StatementErrorKind::MissingOperand {
            keyword: TokenKind::KeywordGoto,
            expected: "a jump target"
        })
    );
    assert_eq!(
        build("INNUM 5"),
        Err(StatementErrorKind::InvalidOperand {
            keyword: TokenKind::KeywordInnum,
            actual: TokenKind::IntegerLiteral,
            expected: "a variable name"
        })
    );
    assert_eq!(
        build("END 1"),
        Err(StatementErrorKind::TrailingToken(TokenKind::IntegerLiteral))
    );
}
