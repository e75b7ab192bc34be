//! Unit tests for the lexer module.
//!
//! This module contains tests for each lexing stage:
//! - Reserved word lookup
//! - Comment filtering across lines
//! - Lexeme extraction
//! - Classification and variable ids

use pretty_assertions::assert_eq;

use super::{
    classifier::classify,
    comments::{CommentFilter, CommentState},
    extractor::{extract, Lexeme},
    keywords::{lookup, Category, RESERVED_LOOKUP},
    lexer::{tokenize, Lexer},
    registry::{VariableId, VariableRegistry},
    tokens::ClassPart,
};

#[test]
fn test_keyword_table() {
    assert_eq!(RESERVED_LOOKUP.len(), 18);

    for word in [
        "Start", "End", "checkThis", "maybeThis", "otherwiseThis", "keepDoing", "repeatTimes",
        "stopNow", "nextRound", "show", "ask", "declare", "assign", "doThis", "runThis", "comment",
    ] {
        assert_eq!(lookup(word), Some(Category::Keyword), "{}", word);
    }

    assert_eq!(lookup("correct"), Some(Category::Boolean));
    assert_eq!(lookup("incorrect"), Some(Category::Boolean));
}

#[test]
fn test_keyword_lookup_is_case_sensitive() {
    assert_eq!(lookup("start"), None);
    assert_eq!(lookup("SHOW"), None);
    assert_eq!(lookup(";"), None);
}

#[test]
fn test_comment_filter_passes_plain_lines() {
    let mut filter = CommentFilter::new();

    assert_eq!(filter.filter("  show x;  "), Some("show x;".to_string()));
    assert_eq!(filter.state(), CommentState::Normal);
}

#[test]
fn test_comment_filter_blank_lines() {
    let mut filter = CommentFilter::new();

    assert_eq!(filter.filter(""), None);
    assert_eq!(filter.filter("   \t "), None);
    assert_eq!(filter.state(), CommentState::Normal);
}

#[test]
fn test_comment_filter_line_comment() {
    let mut filter = CommentFilter::new();

    assert_eq!(filter.filter("x = 1; // note"), Some("x = 1;".to_string()));
    assert_eq!(filter.filter("// only a comment"), None);
    assert_eq!(filter.filter("a // b // c"), Some("a".to_string()));
}

#[test]
fn test_comment_filter_block_comment() {
    let mut filter = CommentFilter::new();

    assert_eq!(filter.filter("/* start"), None);
    assert_eq!(filter.state(), CommentState::InBlockComment);
    assert_eq!(filter.filter("show x;"), None);
    assert_eq!(filter.filter("end */ show y;"), None);
    assert_eq!(filter.state(), CommentState::Normal);
    assert_eq!(filter.filter("show z;"), Some("show z;".to_string()));
}

#[test]
fn test_comment_filter_drops_code_before_block_open() {
    let mut filter = CommentFilter::new();

    assert_eq!(filter.filter("show x; /* trailing"), None);
    assert_eq!(filter.state(), CommentState::InBlockComment);
}

#[test]
fn test_comment_filter_same_line_block_stays_open() {
    let mut filter = CommentFilter::new();

    assert_eq!(filter.filter("/* one line */"), None);
    assert_eq!(filter.state(), CommentState::InBlockComment);
    assert_eq!(filter.filter("show x;"), None);
}

#[test]
fn test_comment_filter_reset() {
    let mut filter = CommentFilter::new();

    filter.filter("/*");
    filter.reset();
    assert_eq!(filter.state(), CommentState::Normal);
}

fn extract_values(line: &str) -> Vec<String> {
    extract(line).into_iter().map(|lexeme| lexeme.value).collect()
}

#[test]
fn test_extract_simple_statement() {
    assert_eq!(extract_values("declare x = 5;"), vec!["declare", "x", "=", "5", ";"]);
}

#[test]
fn test_extract_without_whitespace() {
    assert_eq!(
        extract_values("show(x+1,y){}"),
        vec!["show", "(", "x", "+", "1", ",", "y", ")", "{", "}"]
    );
}

#[test]
fn test_extract_operators_are_single_characters() {
    assert_eq!(extract_values("a<=b!=c"), vec!["a", "<", "=", "b", "!", "=", "c"]);
}

#[test]
fn test_extract_strings() {
    assert_eq!(
        extract_values(r#"show "hello world";"#),
        vec!["show", "\"hello world\"", ";"]
    );
    assert_eq!(extract_values(r#""""#), vec!["\"\""]);
}

#[test]
fn test_extract_word_runs_include_digits() {
    assert_eq!(extract_values("5abc x_1 _y"), vec!["5abc", "x_1", "_y"]);
}

#[test]
fn test_extract_stray_characters() {
    assert_eq!(extract_values("a @ b;"), vec!["a", "@", "b", ";"]);
    assert_eq!(extract_values(r#"show "open"#), vec!["show", "\"", "open"]);
    assert_eq!(extract_values("é"), vec!["é"]);
}

#[test]
fn test_extract_records_byte_columns() {
    assert_eq!(
        extract(r#"show "hi" é;"#),
        vec![
            Lexeme { value: "show".to_string(), column: 0 },
            Lexeme { value: "\"hi\"".to_string(), column: 5 },
            Lexeme { value: "é".to_string(), column: 10 },
            Lexeme { value: ";".to_string(), column: 12 },
        ]
    );
}

#[test]
fn test_classify_categories() {
    let mut registry = VariableRegistry::new();

    let cases = [
        ("declare", "keyword"),
        ("correct", "boolean"),
        ("42", "number"),
        ("\"hi\"", "string"),
        ("count", "id1"),
        ("+", "operator"),
        ("!", "operator"),
        ("(", "symbol"),
        ("}", "symbol"),
        (",", "symbol"),
        (";", "semicolon"),
    ];

    for (lexeme, class_part) in cases {
        let token = classify(lexeme, 7, &mut registry).unwrap();
        assert_eq!(token.class_part.to_string(), class_part, "{}", lexeme);
        assert_eq!(token.value_part, lexeme);
        assert_eq!(token.line_number, 7);
    }
}

#[test]
fn test_classify_keywords_do_not_allocate_ids() {
    let mut registry = VariableRegistry::new();

    classify("show", 1, &mut registry).unwrap();
    classify("incorrect", 1, &mut registry).unwrap();

    assert!(registry.is_empty());
}

#[test]
fn test_classify_rejects_invalid_lexemes() {
    let mut registry = VariableRegistry::new();

    for lexeme in ["@", "#", "5abc", "\"", "é"] {
        let error = classify(lexeme, 3, &mut registry).unwrap_err();
        assert_eq!(error.get_line(), 3);
        assert_eq!(error.get_error_name(), "InvalidLexeme");
    }

    assert!(registry.is_empty());
}

#[test]
fn test_registry_first_occurrence_order() {
    let mut registry = VariableRegistry::new();

    assert_eq!(registry.resolve("b"), VariableId(1));
    assert_eq!(registry.resolve("a"), VariableId(2));
    assert_eq!(registry.resolve("b"), VariableId(1));
    assert_eq!(registry.get("a"), Some(VariableId(2)));
    assert_eq!(registry.get("c"), None);
    assert_eq!(registry.len(), 2);

    let entries: Vec<(&str, VariableId)> = registry.iter().collect();
    assert_eq!(entries, vec![("b", VariableId(1)), ("a", VariableId(2))]);
}

#[test]
fn test_variable_id_display() {
    assert_eq!(VariableId(1).to_string(), "id1");
    assert_eq!(VariableId(12).to_string(), "id12");
    assert_eq!(ClassPart::Variable(VariableId(3)).to_string(), "id3");
}

#[test]
fn test_lex_line_skips_comment_lines() {
    let mut lexer = Lexer::new();

    assert!(lexer.lex_line("// nothing here", 1).is_none());
    assert!(lexer.lex_line("", 2).is_none());
}

#[test]
fn test_lex_line_keeps_tokens_after_failure() {
    let mut lexer = Lexer::new();
    let result = lexer.lex_line("a @ b;", 1).unwrap();

    assert!(result.is_invalid());
    let values: Vec<&str> = result.tokens.iter().map(|t| t.value_part.as_str()).collect();
    assert_eq!(values, vec!["a", "b", ";"]);
    assert_eq!(lexer.registry().len(), 2);
}

#[test]
fn test_lex_line_single_error_per_line() {
    let mut lexer = Lexer::new();
    let result = lexer.lex_line("@ # $", 4).unwrap();

    assert!(result.is_invalid());
    assert!(result.tokens.is_empty());
    assert_eq!(result.error().map(|e| e.get_line()), Some(4));
    assert_eq!(result.error().and_then(|e| e.get_column()), Some(0));
}

#[test]
fn test_lex_line_error_column_is_failing_lexeme() {
    let mut lexer = Lexer::new();
    let result = lexer.lex_line("   show x5abc 5abc; // trailing", 1).unwrap();

    assert_eq!(result.error().and_then(|e| e.get_column()), Some(11));
}

#[test]
fn test_tokenize_ok() {
    let tokens = tokenize("show x;\nshow y;").unwrap();

    assert_eq!(tokens.len(), 6);
    assert_eq!(tokens[4].class_part, ClassPart::Variable(VariableId(2)));
    assert_eq!(tokens[4].line_number, 2);
}

#[test]
fn test_tokenize_returns_first_error() {
    let error = tokenize("show x;\nshow @;\nshow #;").unwrap_err();

    assert_eq!(error.get_line(), 2);
}
