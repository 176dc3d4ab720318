use super::SystemContext;
use std::collections::VecDeque;
use std::io::{BufRead, Write};

fn strip_line_ending(line: &mut String) {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
}

pub struct IoContext<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> IoContext<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl<R: BufRead, W: Write> SystemContext for IoContext<R, W> {
    fn writeln(&mut self, text: &str) {
        if let Err(error) = writeln!(self.writer, "{text}") {
            tracing::warn!(%error, "failed to write output");
        }
    }

    fn readln(&mut self) -> String {
        let mut line = String::new();
        match self.reader.read_line(&mut line) {
            Ok(0) => tracing::warn!("input is exhausted, reading an empty line"),
            Ok(_) => strip_line_ending(&mut line),
            Err(error) => tracing::warn!(%error, "failed to read input"),
        }
        line
    }
}

#[derive(Debug, Default)]
pub struct BufferedContext {
    input: VecDeque<String>,
    output: Vec<String>,
}

impl BufferedContext {
    pub fn with_input<I, S>(input: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            input: input.into_iter().map(Into::into).collect(),
            output: Vec::new(),
        }
    }

    pub fn into_output(self) -> Vec<String> {
        self.output
    }
}

impl SystemContext for BufferedContext {
    fn writeln(&mut self, text: &str) {
        self.output.push(text.to_string());
    }

    fn readln(&mut self) -> String {
        self.input.pop_front().unwrap_or_default()
    }
}

pub struct FnContext<I, O> {
    input: I,
    output: O,
}

impl<I, O> FnContext<I, O>
where
    I: FnMut() -> String,
    O: FnMut(&str),
{
    pub fn new(input: I, output: O) -> Self {
        Self { input, output }
    }
}

impl<I, O> SystemContext for FnContext<I, O>
where
    I: FnMut() -> String,
    O: FnMut(&str),
{
    fn writeln(&mut self, text: &str) {
        (self.output)(text);
    }

    fn readln(&mut self) -> String {
        (self.input)()
    }
}
