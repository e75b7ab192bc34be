use std::fmt::Display;

use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Error {
    internal_error: ErrorImpl,
    line: usize,
    column: Option<usize>,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, line: usize) -> Self {
        Error {
            internal_error: error_impl,
            line,
            column: None,
        }
    }

    /// Attaches the byte offset of the failing lexeme within its trimmed line.
    pub fn with_column(mut self, column: usize) -> Self {
        self.column = Some(column);
        self
    }

    pub fn get_column(&self) -> Option<usize> {
        self.column
    }

    /// 1-based source line the error was raised on.
    pub fn get_line(&self) -> usize {
        self.line
    }

    pub fn get_error_impl(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::InvalidLexeme { .. } => "InvalidLexeme",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::InvalidLexeme { lexeme } if lexeme == "\"" => ErrorTip::Suggestion(
                String::from("String literals must be closed on the same line"),
            ),
            ErrorImpl::InvalidLexeme { lexeme }
                if lexeme.starts_with(|c: char| c.is_ascii_digit()) =>
            {
                ErrorTip::Suggestion(format!("Names cannot start with a digit: `{}`", lexeme))
            }
            ErrorImpl::InvalidLexeme { .. } => ErrorTip::None,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Error on Line {}: Invalid syntax or unrecognized token.",
            self.line
        )
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.internal_error)
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
pub enum ErrorImpl {
    #[error("invalid lexeme: {lexeme:?}")]
    InvalidLexeme { lexeme: String },
}
