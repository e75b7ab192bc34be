use crate::{
    errors::errors::Error,
    report::report::{LineResult, Report},
};

use super::{
    classifier::classify, comments::CommentFilter, extractor::TokenExtractor,
    registry::VariableRegistry, tokens::Token,
};

/// Per-parse lexing context.
///
/// Holds the comment state and the variable registry for one pass over a
/// source. Every call to [`parse`] builds a new one, so ids never leak from
/// one parse into the next.
#[derive(Debug, Default)]
pub struct Lexer {
    comments: CommentFilter,
    extractor: TokenExtractor,
    registry: VariableRegistry,
}

impl Lexer {
    pub fn new() -> Lexer {
        Lexer::default()
    }

    pub fn registry(&self) -> &VariableRegistry {
        &self.registry
    }

    /// Lexes a single source line. Returns `None` when the line is blank or
    /// fully consumed by comments.
    pub fn lex_line(&mut self, line: &str, line_number: usize) -> Option<LineResult> {
        let Some(code) = self.comments.filter(line) else {
            tracing::trace!(line_number, "line discarded");
            return None;
        };

        let mut result = LineResult::new(line_number);

        for lexeme in self.extractor.extract(&code) {
            match classify(&lexeme.value, line_number, &mut self.registry) {
                Ok(token) => result.tokens.push(token),
                Err(error) => result.fail(error.with_column(lexeme.column)),
            }
        }

        if result.is_invalid() {
            tracing::debug!(line_number, "invalid line");
        }

        Some(result)
    }

    /// Lexes every line of `source`, consuming the context.
    pub fn lex(mut self, source: &str) -> (Vec<LineResult>, VariableRegistry) {
        self.comments.reset();

        let lines: Vec<LineResult> = source
            .split('\n')
            .enumerate()
            .filter_map(|(index, line)| self.lex_line(line, index + 1))
            .collect();

        (lines, self.registry)
    }
}

/// Lexes a whole FlowScript source and assembles the report.
#[tracing::instrument(level = "debug", skip_all, fields(bytes = source.len()))]
pub fn parse(source: &str) -> Report {
    let (lines, registry) = Lexer::new().lex(source);
    let report = Report::from_lines(lines, &registry);

    tracing::debug!(
        tokens = report.tokens.len(),
        errors = report.errors.len(),
        variables = registry.len(),
        "parse finished"
    );

    report
}

/// Lexes `source` and returns only the token list, or the first error.
pub fn tokenize(source: &str) -> Result<Vec<Token>, Error> {
    let report = parse(source);

    match report.diagnostics.into_iter().next() {
        Some(error) => Err(error),
        None => Ok(report.tokens),
    }
}
