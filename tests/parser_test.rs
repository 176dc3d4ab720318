use grin::parser::{
    formatter::{BasicFormatter, ParserFormatter, PrettyFormatter},
    parse, statement_start, ParserErrorKind,
};
use grin::token::{Location, TokenKind};

fn parse_error(lines: &[&str]) -> (ParserErrorKind, Location) {
    let error = parse(lines).expect_err("Program should be rejected");
    (error.kind, error.location)
}

#[test]
fn test_stops_at_terminator() {
    let program = parse(["LET A 1", "PRINT A", ".", "this is not Grin"]).expect("Valid program");
    assert_eq!(program.len(), 2);
    assert_eq!(program[0][0].kind, TokenKind::KeywordLet);
    assert_eq!(program[1][1].text(), "A");
}

#[test]
fn test_terminator_with_whitespace() {
    let program = parse(["END", "  .  "]).expect("Valid program");
    assert_eq!(program.len(), 1);
}

#[test]
fn test_missing_terminator() {
    let (kind, location) = parse_error(&["LET A 1", "PRINT A"]);
    assert_eq!(kind, ParserErrorKind::MissingTerminator);
    assert_eq!(location.line, 3);
}

#[test]
fn test_every_statement_form() {
    let program = parse([
        "LET A 1",
        "PRINT \"text\"",
        "INNUM A",
        "INSTR B",
        "ADD A 1.5",
        "SUB A B",
        "MULT B 2",
        "DIV A 3",
        "GOTO 2",
        "GOTO \"L\" IF A <= 3",
        "L: GOSUB T IF \"a\" <> B",
        "RETURN",
        "END",
        ".",
    ])
    .expect("Valid program");
    assert_eq!(program.len(), 13);
}

#[test]
fn test_label_prefix() {
    let program = parse(["START: PRINT 1", "."]).expect("Valid program");
    let tokens = &program[0];
    assert_eq!(statement_start(tokens), 2);
    assert_eq!(tokens[2].kind, TokenKind::KeywordPrint);

    let program = parse(["PRINT 1", "."]).expect("Valid program");
    assert_eq!(statement_start(&program[0]), 0);
}

#[test]
fn test_missing_operand() {
    let (kind, location) = parse_error(&["PRINT", "."]);
    assert_eq!(
        kind,
        ParserErrorKind::UnexpectedEndOfLine {
            expected: "a literal or variable"
        }
    );
    assert_eq!(location, Location::new(1, 6));
}

#[test]
fn test_wrong_operand() {
    let (kind, location) = parse_error(&["LET 5 A", "."]);
    assert_eq!(
        kind,
        ParserErrorKind::UnexpectedToken {
            actual: TokenKind::IntegerLiteral,
            expected: "a variable name"
        }
    );
    assert_eq!(location, Location::new(1, 5));
}

#[test]
fn test_float_jump_target() {
    let (kind, _) = parse_error(&["GOTO 1.5", "."]);
    assert!(matches!(
        kind,
        ParserErrorKind::UnexpectedToken {
            actual: TokenKind::FloatLiteral,
            ..
        }
    ));
}

#[test]
fn test_incomplete_condition() {
    let (kind, _) = parse_error(&["GOTO 2 IF A", "."]);
    assert_eq!(
        kind,
        ParserErrorKind::UnexpectedEndOfLine {
            expected: "a comparison operator"
        }
    );
}

#[test]
fn test_trailing_token() {
    let (kind, location) = parse_error(&["END", "RETURN 5", "."]);
    assert_eq!(kind, ParserErrorKind::TrailingToken(TokenKind::IntegerLiteral));
    assert_eq!(location, Location::new(2, 8));
}

#[test]
fn test_label_without_statement() {
    let (kind, _) = parse_error(&["LOOP:", "."]);
    assert_eq!(
        kind,
        ParserErrorKind::UnexpectedEndOfLine {
            expected: "a statement"
        }
    );
}

#[test]
fn test_empty_line() {
    let (kind, location) = parse_error(&["PRINT 1", "", "."]);
    assert_eq!(
        kind,
        ParserErrorKind::UnexpectedEndOfLine {
            expected: "a statement"
        }
    );
    assert_eq!(location.line, 2);
}

#[test]
fn test_if_is_not_a_statement() {
    let (kind, _) = parse_error(&["IF A = 1", "."]);
    assert_eq!(
        kind,
        ParserErrorKind::UnexpectedToken {
            actual: TokenKind::KeywordIf,
            expected: "a statement"
        }
    );
}

#[test]
fn test_lexical_error() {
    let error = parse(["PRINT #", "."]).expect_err("Program should be rejected");
    assert!(matches!(error.kind, ParserErrorKind::LexicalError(_)));
    assert_eq!(error.code(), "PE005");
    assert_eq!(error.location, Location::new(1, 7));
}

#[test]
fn test_basic_format() {
    let error = parse(["PRINT", "."]).expect_err("Program should be rejected");
    assert_eq!(
        BasicFormatter.format_error(&error),
        "[line 1] Expected a literal or variable but the line ended."
    );
}

#[test]
fn test_pretty_format() {
    let lines = ["LET A 1", "LET 5 A", "."];
    let error = parse(lines).expect_err("Program should be rejected");
    let report = PrettyFormatter::new("bad.grin", &lines)
        .without_color()
        .format_error(&error);
    assert!(report.contains("PE001"), "{report}");
    assert!(report.contains("bad.grin"), "{report}");
}
