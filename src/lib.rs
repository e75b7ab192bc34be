#![allow(clippy::module_inception)]

use std::sync::Once;

use crate::errors::errors::{Error, ErrorTip};

pub mod config;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod report;

extern crate regex;

pub use lexer::lexer::parse;
pub use report::report::Report;

static TRACING_INIT: Once = Once::new();

/// Installs a tracing subscriber when `RUST_LOG` is set, e.g.
/// `RUST_LOG=flowscript=trace`. Safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}

/// Returns the text of 1-based line `line_number`, if the source has it.
pub fn get_line(source: &str, line_number: usize) -> Option<&str> {
    line_number
        .checked_sub(1)
        .and_then(|index| source.split('\n').nth(index))
        .map(|line| line.trim_end_matches('\r'))
}


/// Renders an error with the offending source line underneath:
///
/// ```text
/// Error on Line 20: Invalid syntax or unrecognized token.
///   InvalidLexeme (Names cannot start with a digit: `9lives`)
///    |
/// 20 | declare a = 9lives;
///    | ------------^
/// ```
pub fn render_error(error: &Error, source: &str) -> String {
    let mut out = format!("{}\n", error);

    if let ErrorTip::None = error.get_tip() {
        out.push_str(&format!("  {}\n", error.get_error_name()));
    } else {
        out.push_str(&format!("  {} ({})\n", error.get_error_name(), error.get_tip()));
    }

    let Some(line_text) = get_line(source, error.get_line()) else {
        return out;
    };

    let line_string = error.get_line().to_string();
    let padding = line_string.len() + 2;
    let line_text = line_text.trim();

    out.push_str(&format!("{:>padding$}\n", "|"));
    out.push_str(&format!("{} | {}\n", line_string, line_text));

    // Columns are offsets into the trimmed line, which is where the
    // comment filter hands text to the extractor.
    if let Some(prefix) = error.get_column().and_then(|column| line_text.get(..column)) {
        let arrows = prefix.chars().count() + 1;
        out.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));
    }

    out
}
