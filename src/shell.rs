use std::io::BufRead;

pub const TERMINATOR: &str = ".";

/// Reads program lines up to and including the terminator line, leaving the
/// rest of `reader` unread for the program's own input. Whitespace around the
/// `.` is ignored. Stops early at end of input.
pub fn read_program_lines<R: BufRead>(mut reader: R) -> std::io::Result<Vec<String>> {
    let mut lines = Vec::new();
    loop {
        let mut line = String::new();
        if reader.read_line(&mut line)? == 0 {
            break;
        }
        let line = line.strip_suffix('\n').unwrap_or(&line);
        let line = line.strip_suffix('\r').unwrap_or(line);
        let is_terminator = line.trim() == TERMINATOR;
        lines.push(line.to_string());
        if is_terminator {
            break;
        }
    }
    Ok(lines)
}
