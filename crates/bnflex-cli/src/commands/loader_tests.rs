use std::fs;
use std::path::Path;

use super::loader::{LoadError, load_grammar, load_input};

#[test]
fn inline_grammar_has_no_origin() {
    let grammar = load_grammar(None, Some("root ::= \"a\"\r\n| \"b\"")).unwrap();

    assert_eq!(grammar.text, "root ::= \"a\"\n| \"b\"");
    assert!(grammar.origin.is_none());
}

#[test]
fn inline_grammar_wins_over_path() {
    let grammar = load_grammar(Some(Path::new("missing.bnf")), Some("root ::= EOF")).unwrap();

    assert_eq!(grammar.text, "root ::= EOF");
}

#[test]
fn grammar_file_normalizes_line_endings() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("words.bnf");
    fs::write(&path, "root ::= word+\r\nword ::= [a-z]\r\n").unwrap();

    let grammar = load_grammar(Some(&path), None).unwrap();

    assert_eq!(grammar.text, "root ::= word+\nword ::= [a-z]");
    assert_eq!(grammar.origin, Some(path.display().to_string()));
}

#[test]
fn missing_grammar_is_reported() {
    let err = load_grammar(None, None).unwrap_err();

    assert!(matches!(err, LoadError::MissingGrammar));
    insta::assert_snapshot!(err, @"grammar is required: use a positional argument or -g/--grammar");
}

#[test]
fn unreadable_grammar_names_the_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nope.bnf");

    let err = load_grammar(Some(&path), None).unwrap_err();

    assert!(matches!(err, LoadError::Read { path: ref p, .. } if p == &path));
    assert!(
        err.to_string()
            .starts_with(&format!("failed to read '{}': ", path.display()))
    );
}

#[test]
fn input_file_is_read_verbatim() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("input.txt");
    fs::write(&path, "a\r\nb\r\n").unwrap();

    let input = load_input(Some(&path), None, None).unwrap();

    assert_eq!(input, "a\r\nb\r\n");
}

#[test]
fn inline_input_wins_over_path() {
    let input = load_input(Some(Path::new("missing.txt")), Some("42"), None).unwrap();

    assert_eq!(input, "42");
}

#[test]
fn missing_input_is_reported() {
    let err = load_input(None, None, Some(Path::new("g.bnf"))).unwrap_err();

    insta::assert_snapshot!(err, @"input is required: use a positional argument or -s/--source");
}

#[test]
fn stdin_cannot_serve_grammar_and_input() {
    let err = load_input(Some(Path::new("-")), None, Some(Path::new("-"))).unwrap_err();

    assert!(matches!(err, LoadError::StdinTwice));
}
