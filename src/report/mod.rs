//! Assembly of lexing results into user-facing output.
//!
//! Turns per-line results into the token list, the per-line summary
//! strings and the error messages.

pub mod report;
