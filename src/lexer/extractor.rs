use lazy_static::lazy_static;
use regex::Regex;

use crate::MK_PATTERN;

pub type LexemeHandler = fn(&mut TokenExtractor, &str);

pub struct LexemePattern {
    regex: Regex,
    handler: LexemeHandler,
}

lazy_static! {
    static ref PATTERNS: Vec<LexemePattern> = vec![
        MK_PATTERN!(r"^\s+", skip_handler),
        MK_PATTERN!(r"^[A-Za-z0-9_]+", push_handler),
        MK_PATTERN!(r#"^"[^"]*""#, push_handler),
        MK_PATTERN!(r"^[+\-*/=<>!]", push_handler),
        MK_PATTERN!(r"^[;(),{}]", push_handler),
    ];
}

/// A raw lexeme and the byte offset it starts at within its cleaned line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lexeme {
    pub value: String,
    pub column: usize,
}

/// Splits a cleaned line into raw lexemes.
///
/// Word runs cover keywords, identifiers and numbers alike; telling them
/// apart is the classifier's job. A character no pattern accepts becomes a
/// lexeme of its own so that classification can reject it.
#[derive(Debug, Default)]
pub struct TokenExtractor {
    lexemes: Vec<Lexeme>,
    pos: usize,
}

impl TokenExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, lexeme: &str) {
        self.lexemes.push(Lexeme {
            value: lexeme.to_string(),
            column: self.pos,
        });
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    pub fn extract(&mut self, line: &str) -> Vec<Lexeme> {
        self.lexemes.clear();
        self.pos = 0;

        while self.pos < line.len() {
            let remainder = &line[self.pos..];
            let mut matched = false;

            for pattern in PATTERNS.iter() {
                if let Some(found) = pattern.regex.find(remainder) {
                    (pattern.handler)(self, found.as_str());
                    matched = true;
                    break;
                }
            }

            if !matched {
                if let Some(stray) = remainder.chars().next() {
                    tracing::trace!(%stray, column = self.pos, "unrecognised character");
                    let mut buf = [0u8; 4];
                    push_handler(self, stray.encode_utf8(&mut buf));
                }
            }
        }

        tracing::trace!(lexemes = ?self.lexemes, "extracted lexemes");
        std::mem::take(&mut self.lexemes)
    }
}

fn push_handler(extractor: &mut TokenExtractor, matched: &str) {
    extractor.push(matched);
    extractor.advance_n(matched.len());
}

fn skip_handler(extractor: &mut TokenExtractor, matched: &str) {
    extractor.advance_n(matched.len());
}

/// Convenience wrapper around a fresh extractor.
pub fn extract(line: &str) -> Vec<Lexeme> {
    TokenExtractor::new().extract(line)
}
