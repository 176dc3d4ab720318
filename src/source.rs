use crate::token::Location;
use ariadne::{Color, Config, Label, Report, ReportKind, Source};
use std::ops::Range;

const ARIADNE_MSG: &str = "Ariadne produces valid utf-8 strings";
const ARIADNE_WRITE_MSG: &str = "Write into buffer should not fail.";

#[derive(Debug, Clone)]
pub struct SourceText {
    text: String,
    line_starts: Vec<usize>,
}

impl SourceText {
    pub fn new<S: AsRef<str>>(lines: &[S]) -> Self {
        let mut text = String::new();
        let mut line_starts = Vec::with_capacity(lines.len());
        let mut offset = 0;
        for line in lines {
            let line = line.as_ref();
            line_starts.push(offset);
            text.push_str(line);
            text.push('\n');
            offset += line.chars().count() + 1;
        }
        Self { text, line_starts }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn line_range(&self, line: usize) -> Range<usize> {
        let end_of_text = self.text.chars().count();
        let Some(&start) = line.checked_sub(1).and_then(|index| self.line_starts.get(index))
        else {
            return end_of_text..end_of_text;
        };
        let end = self
            .line_starts
            .get(line)
            .map(|next| next - 1)
            .unwrap_or(end_of_text.saturating_sub(1));
        start..end
    }

    pub fn span(&self, location: Location, length: usize) -> Range<usize> {
        let line = self.line_range(location.line as usize);
        let start = (line.start + location.column.saturating_sub(1) as usize).min(line.end);
        start..start.saturating_add(length).min(line.end.max(start + 1))
    }
}

pub struct ReportRenderer<'a> {
    pub path: &'a str,
    pub source: &'a SourceText,
    pub color: bool,
}

impl<'a> ReportRenderer<'a> {
    pub fn render(&self, code: &str, message: &str, range: Range<usize>, label: &str) -> String {
        let path = self.path;
        let mut output = std::io::Cursor::new(Vec::new());
        Report::build(ReportKind::Error, (path, range.clone()))
            .with_config(Config::default().with_color(self.color))
            .with_code(code)
            .with_message(message)
            .with_label(
                Label::new((path, range))
                    .with_message(label)
                    .with_color(Color::BrightRed),
            )
            .finish()
            .write((path, Source::from(self.source.text())), &mut output)
            .expect(ARIADNE_WRITE_MSG);
        String::from_utf8(output.into_inner()).expect(ARIADNE_MSG)
    }
}
