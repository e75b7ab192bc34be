//! Error types for lexical analysis.
//!
//! FlowScript has a single lexical error kind: a lexeme that no
//! classification rule accepts. This module defines:
//!
//! - The error structure carrying the source line it belongs to
//! - The error variant and its tip
//! - The exact message reported to the user for an invalid line

pub mod errors;
