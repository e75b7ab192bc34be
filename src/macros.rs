//! Utility macros for the lexer.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_PATTERN!` - Creates an anchored lexeme pattern with its handler

/// Creates a Token instance.
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(1, ClassPart::Number, "42".to_string());
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($line:expr, $class_part:expr, $value:expr) => {
        Token {
            line_number: $line,
            class_part: $class_part,
            value_part: $value,
        }
    };
}

/// Creates a lexeme pattern from a regex literal and a handler.
///
/// The regex must be anchored with `^` so it only matches at the current
/// position.
#[macro_export]
macro_rules! MK_PATTERN {
    ($regex:literal, $handler:expr) => {
        LexemePattern {
            regex: Regex::new($regex).unwrap(),
            handler: $handler,
        }
    };
}
