use serde::Serialize;

use crate::{
    errors::errors::Error,
    lexer::{
        registry::{VariableId, VariableRegistry},
        tokens::Token,
    },
};

/// Tokens and validity of one source line. Only lines that reached the
/// extractor produce one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineResult {
    pub line_number: usize,
    pub tokens: Vec<Token>,
    error: Option<Error>,
}

impl LineResult {
    pub fn new(line_number: usize) -> Self {
        LineResult {
            line_number,
            tokens: vec![],
            error: None,
        }
    }

    /// Marks the line invalid. Only the first error of a line is kept.
    pub fn fail(&mut self, error: Error) {
        if self.error.is_none() {
            self.error = Some(error);
        }
    }

    pub fn is_invalid(&self) -> bool {
        self.error.is_some()
    }

    pub fn error(&self) -> Option<&Error> {
        self.error.as_ref()
    }

    /// `Line <n> (<class>, <value>) ...`
    pub fn summary(&self) -> String {
        let mut summary = format!("Line {}", self.line_number);
        for token in &self.tokens {
            summary.push(' ');
            summary.push_str(&token.to_string());
        }
        summary
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Variable {
    pub name: String,
    pub id: VariableId,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Report {
    /// Every classified token, including those from invalid lines.
    pub tokens: Vec<Token>,
    /// One summary per valid line.
    pub summaries: Vec<String>,
    /// One message per invalid line.
    pub errors: Vec<String>,
    pub variables: Vec<Variable>,
    #[serde(skip)]
    pub diagnostics: Vec<Error>,
}

impl Report {
    pub fn from_lines(lines: Vec<LineResult>, registry: &VariableRegistry) -> Self {
        let mut report = Report {
            variables: registry
                .iter()
                .map(|(name, id)| Variable {
                    name: name.to_string(),
                    id,
                })
                .collect(),
            ..Default::default()
        };

        for line in lines {
            match line.error {
                Some(ref error) => {
                    report.errors.push(error.to_string());
                    report.diagnostics.push(error.clone());
                }
                None if !line.tokens.is_empty() => report.summaries.push(line.summary()),
                None => {}
            }

            report.tokens.extend(line.tokens);
        }

        report
    }

    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
