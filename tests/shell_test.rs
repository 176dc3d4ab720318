use std::io::{BufRead, Cursor};

use grin::shell::{read_program_lines, TERMINATOR};

#[test]
fn test_reads_up_to_terminator() {
    let mut input = Cursor::new("LET A 1\nPRINT A\n.\n42\nleft over\n");
    let lines = read_program_lines(&mut input).expect("In-memory reads succeed");
    assert_eq!(lines, vec!["LET A 1", "PRINT A", TERMINATOR]);

    let rest: Vec<String> = input
        .lines()
        .collect::<Result<_, _>>()
        .expect("In-memory reads succeed");
    assert_eq!(rest, vec!["42", "left over"]);
}

#[test]
fn test_stops_at_end_of_input() {
    let lines =
        read_program_lines(Cursor::new("PRINT 1\nEND")).expect("In-memory reads succeed");
    assert_eq!(lines, vec!["PRINT 1", "END"]);
}

#[test]
fn test_strips_carriage_returns() {
    let lines =
        read_program_lines(Cursor::new("PRINT 1\r\n.\r\n")).expect("In-memory reads succeed");
    assert_eq!(lines, vec!["PRINT 1", "."]);
}

#[test]
fn test_empty_input() {
    let lines = read_program_lines(Cursor::new("")).expect("In-memory reads succeed");
    assert!(lines.is_empty());
}

#[test]
fn test_indented_terminator() {
    let lines =
        read_program_lines(Cursor::new("END\n  . \nafter")).expect("In-memory reads succeed");
    assert_eq!(lines, vec!["END", "  . "]);
}
