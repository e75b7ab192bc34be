use lazy_static::lazy_static;
use regex::Regex;

use crate::{
    errors::errors::{Error, ErrorImpl},
    MK_TOKEN,
};

use super::{
    keywords::lookup,
    registry::VariableRegistry,
    tokens::{ClassPart, Token},
};

lazy_static! {
    static ref NUMBER: Regex = Regex::new(r"^[0-9]+$").unwrap();
    static ref STRING: Regex = Regex::new(r#"^"[^"]*"$"#).unwrap();
    static ref IDENTIFIER: Regex = Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").unwrap();
}

const OPERATORS: [&str; 8] = ["+", "-", "*", "/", "=", "<", ">", "!"];
const SYMBOLS: [&str; 6] = [";", "(", ")", ",", "{", "}"];

/// Classifies one lexeme, allocating a variable id for new identifiers.
///
/// Rules are tried in order: reserved word, number, string, identifier,
/// operator, punctuation. A lexeme matching none of them is an error.
pub fn classify(
    lexeme: &str,
    line_number: usize,
    registry: &mut VariableRegistry,
) -> Result<Token, Error> {
    let class_part = if let Some(category) = lookup(lexeme) {
        ClassPart::Keyword(category)
    } else if NUMBER.is_match(lexeme) {
        ClassPart::Number
    } else if STRING.is_match(lexeme) {
        ClassPart::String
    } else if IDENTIFIER.is_match(lexeme) {
        ClassPart::Variable(registry.resolve(lexeme))
    } else if OPERATORS.contains(&lexeme) {
        ClassPart::Operator
    } else if SYMBOLS.contains(&lexeme) {
        if lexeme == ";" {
            ClassPart::Semicolon
        } else {
            ClassPart::Symbol
        }
    } else {
        return Err(Error::new(
            ErrorImpl::InvalidLexeme {
                lexeme: lexeme.to_string(),
            },
            line_number,
        ));
    };

    Ok(MK_TOKEN!(line_number, class_part, lexeme.to_string()))
}
