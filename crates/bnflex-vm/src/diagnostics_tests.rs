use bnflex_core::Grammar;

use crate::{Diagnostic, Lexer};

#[test]
fn renders_caret_under_position() {
    let diag = Diagnostic::error(4, 4, "input does not match the grammar")
        .with_label("unexpected \"x\"");

    insta::assert_snapshot!(diag.render("1 + x", None, false), @r#"
    error: input does not match the grammar
      |
    1 | 1 + x
      |     ^ unexpected "x"
    "#);
}

#[test]
fn renders_path_and_line() {
    let diag = Diagnostic::error(4, 5, "bad");

    insta::assert_snapshot!(diag.render("ab\ncd", Some("input.txt"), false), @r"
    error: bad
     --> input.txt:2:2
      |
    2 | cd
      |  ^ bad
    ");
}

#[test]
fn colored_render_has_ansi() {
    let diag = Diagnostic::error(0, 1, "bad");

    let out = diag.render("x", None, true);
    assert!(out.contains('\x1b'));
    assert!(out.contains("bad"));
}

#[test]
fn tokenize_errors_convert() {
    let mut g = Grammar::new();
    let root = g.literal("yes");
    let lexer = Lexer::new(g, root).unwrap();
    let err = lexer.tokenize("no").unwrap_err();

    let diag = Diagnostic::from(&err);

    assert_eq!(diag.message(), "input does not match the grammar");
    insta::assert_snapshot!(diag.render("no", None, false), @r#"
    error: input does not match the grammar
      |
    1 | no
      | ^ unexpected "no"
    "#);
}
