use crate::parser::TokenLine;
use crate::token::TokenKind;
use compact_str::CompactString;
use std::collections::HashMap;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelTable {
    labels: HashMap<CompactString, usize>,
}

impl LabelTable {
    pub fn build(token_lines: &[TokenLine]) -> Self {
        let mut labels = HashMap::new();
        for (index, tokens) in token_lines.iter().enumerate() {
            let [label, colon, ..] = tokens.as_slice() else {
                continue;
            };
            if label.kind != TokenKind::Ident || colon.kind != TokenKind::Colon {
                continue;
            }
            if let Some(previous) = labels.insert(label.text.clone(), index) {
                tracing::warn!(
                    label = %label.text,
                    previous = previous + 1,
                    line = index + 1,
                    "label defined more than once, the last definition wins"
                );
            }
        }
        Self { labels }
    }

    pub fn get(&self, name: &str) -> Option<usize> {
        self.labels.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}
