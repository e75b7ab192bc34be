//! Lexical analysis module for FlowScript.
//!
//! This module converts raw source text into a classified token stream.
//! Processing is single-pass and line-oriented:
//!
//! - Comment removal with block-comment state carried across lines
//! - Segmentation of each line into raw lexemes using regex patterns
//! - Classification of lexemes against the reserved word table
//! - Stable synthetic ids for user-defined identifiers

pub mod classifier;
pub mod comments;
pub mod extractor;
pub mod keywords;
pub mod lexer;
pub mod registry;
pub mod tokens;

#[cfg(test)]
mod tests;
