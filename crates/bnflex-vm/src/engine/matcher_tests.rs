use bnflex_core::{Grammar, NodeId, TreePrinter};

use super::{FuelLimits, MatchOutcome, NoopTracer, RuntimeError, match_at};

fn run(grammar: &Grammar, root: NodeId, input: &str) -> MatchOutcome {
    match_at(grammar, root, input, 0, FuelLimits::default(), &mut NoopTracer).unwrap()
}

/// Printed tree and end offset, or `None` on failure.
fn matched(grammar: &Grammar, root: NodeId, input: &str) -> Option<(String, usize)> {
    run(grammar, root, input)
        .matched
        .map(|m| (TreePrinter::new(&m.tree).dump(), m.end))
}

fn end(grammar: &Grammar, root: NodeId, input: &str) -> Option<usize> {
    run(grammar, root, input).matched.map(|m| m.end)
}

#[test]
fn literal_matches_prefix() {
    let mut g = Grammar::new();
    let lit = g.literal("ab");

    assert_eq!(end(&g, lit, "abc"), Some(2));
    assert_eq!(end(&g, lit, "ax"), None);
    assert_eq!(end(&g, lit, "a"), None);
}

#[test]
fn char_classes_test_membership() {
    let mut g = Grammar::new();
    let vowels = g.char_set("aeiou", false);
    let not_vowels = g.char_set("aeiou", true);
    let digits = g.char_range('0', '9', false);
    let not_digits = g.char_range('0', '9', true);
    let any = g.char_set("", true);

    assert_eq!(end(&g, vowels, "e"), Some(1));
    assert_eq!(end(&g, vowels, "x"), None);
    assert_eq!(end(&g, not_vowels, "x"), Some(1));
    assert_eq!(end(&g, not_vowels, "a"), None);
    assert_eq!(end(&g, digits, "7"), Some(1));
    assert_eq!(end(&g, not_digits, "7"), None);
    assert_eq!(end(&g, any, "\n"), Some(1));
    assert_eq!(end(&g, any, ""), None);
}

#[test]
fn char_classes_advance_by_whole_characters() {
    let mut g = Grammar::new();
    let accented = g.char_set("é", false);
    let any = g.char_set("", true);

    assert_eq!(end(&g, accented, "é!"), Some(2));
    assert_eq!(end(&g, any, "日本"), Some(3));
}

#[test]
fn sequence_is_atomic() {
    let mut g = Grammar::new();
    let a = g.literal("a");
    let b = g.literal("b");
    let seq = g.sequence([a, b]);

    let outcome = run(&g, seq, "ac");

    assert!(outcome.matched.is_none());
    assert_eq!(outcome.furthest_failure, 1);
}

#[test]
fn sequence_collects_children() {
    let mut g = Grammar::new();
    let a = g.literal("a");
    let a = g.named(a, "first");
    let b = g.literal("b");
    let seq = g.sequence([a, b]);
    let seq = g.named(seq, "pair");

    let (tree, end) = matched(&g, seq, "ab").unwrap();

    assert_eq!(end, 2);
    insta::assert_snapshot!(tree, @r#"
    pair
      first "a"
      _ "b"
    "#);
}

#[test]
fn choice_takes_first_success() {
    let mut g = Grammar::new();
    let a = g.literal("a");
    let ab = g.literal("ab");
    let choice = g.choice([a, ab]);

    assert_eq!(end(&g, choice, "ab"), Some(1));
    assert_eq!(end(&g, choice, "b"), None);
}

#[test]
fn choice_passes_through_and_names_unnamed_result() {
    let mut g = Grammar::new();
    let t = g.literal("true");
    let f = g.literal("false");
    let f = g.named(f, "no");
    let boolean = g.choice([t, f]);
    let boolean = g.named(boolean, "boolean");

    let (tree, _) = matched(&g, boolean, "true").unwrap();
    insta::assert_snapshot!(tree, @r#"boolean "true""#);

    let (tree, _) = matched(&g, boolean, "false").unwrap();
    insta::assert_snapshot!(tree, @r#"no "false""#);
}

#[test]
fn repeat_is_greedy_and_needs_one() {
    let mut g = Grammar::new();
    let digit = g.char_range('0', '9', false);
    let digits = g.repeat(digit);
    let digits = g.named(digits, "digits");

    assert_eq!(end(&g, digits, ""), None);
    assert_eq!(end(&g, digits, "x"), None);

    let (tree, end) = matched(&g, digits, "123x").unwrap();
    assert_eq!(end, 3);
    insta::assert_snapshot!(tree, @r#"
    digits
      _ "1"
      _ "2"
      _ "3"
    "#);
}

#[test]
fn optional_never_fails() {
    let mut g = Grammar::new();
    let a = g.literal("a");
    let maybe = g.optional(a);
    let maybe = g.named(maybe, "maybe");

    let (tree, end) = matched(&g, maybe, "b").unwrap();
    assert_eq!(end, 0);
    insta::assert_snapshot!(tree, @r#"maybe """#);

    let (tree, end) = matched(&g, maybe, "a").unwrap();
    assert_eq!(end, 1);
    insta::assert_snapshot!(tree, @r#"
    maybe
      _ "a"
    "#);
}

#[test]
fn negation_is_zero_width_lookahead() {
    let mut g = Grammar::new();
    let kw = g.literal("if");
    let letter = g.char_range('a', 'z', false);
    let not_letter = g.negation(letter);
    let keyword = g.sequence([kw, not_letter]);

    assert_eq!(end(&g, keyword, "if"), Some(2));
    assert_eq!(end(&g, keyword, "if("), Some(2));
    assert_eq!(end(&g, keyword, "iffy"), None);
}

#[test]
fn negation_discards_child_nodes() {
    let mut g = Grammar::new();
    let x = g.literal("x");
    let not_x = g.negation(x);
    let not_x = g.named(not_x, "not_x");
    let any = g.char_set("", true);
    let seq = g.sequence([not_x, any]);

    let (tree, end) = matched(&g, seq, "y").unwrap();
    assert_eq!(end, 1);
    insta::assert_snapshot!(tree, @r#"
    _
      not_x ""
      _ "y"
    "#);
}

#[test]
fn failures_inside_lookahead_do_not_move_furthest() {
    let mut g = Grammar::new();
    let long = g.literal("abcdef");
    let guard = g.negation(long);
    let a = g.literal("a");
    let z = g.literal("z");
    let seq = g.sequence([guard, a, z]);

    let outcome = run(&g, seq, "abcdeX");

    assert!(outcome.matched.is_none());
    assert_eq!(outcome.furthest_failure, 1);
}

#[test]
fn end_of_input_only_at_end() {
    let mut g = Grammar::new();
    let a = g.literal("a");
    let eof = g.end_of_input();
    let seq = g.sequence([a, eof]);

    assert_eq!(end(&g, seq, "a"), Some(1));
    assert_eq!(end(&g, seq, "ab"), None);
}

#[test]
fn match_at_starts_mid_input() {
    let mut g = Grammar::new();
    let b = g.literal("b");

    let outcome = match_at(&g, b, "ab", 1, FuelLimits::default(), &mut NoopTracer).unwrap();
    let m = outcome.matched.unwrap();
    assert_eq!(m.end, 2);
    assert_eq!(m.tree.span(m.tree.root()).start, 1);
    assert_eq!(m.tree.source(), "ab");

    let outcome = match_at(&g, b, "éb", 1, FuelLimits::default(), &mut NoopTracer).unwrap();
    assert!(outcome.matched.is_none());
}

#[test]
fn reaching_a_reference_is_an_error() {
    let mut g = Grammar::new();
    let a = g.literal("a");
    let r = g.reference("later");
    let seq = g.sequence([a, r]);

    let err = match_at(&g, seq, "ab", 0, FuelLimits::default(), &mut NoopTracer).unwrap_err();
    assert_eq!(
        err,
        RuntimeError::UnresolvedReference {
            name: "later".to_string()
        }
    );
}

#[test]
fn non_advancing_repeat_is_an_error() {
    let mut g = Grammar::new();
    let a = g.literal("a");
    let maybe = g.optional(a);
    let spin = g.repeat(maybe);

    let err = match_at(&g, spin, "aab", 0, FuelLimits::default(), &mut NoopTracer).unwrap_err();
    assert_eq!(err, RuntimeError::NonAdvancingRepeat { position: 2 });
}

#[test]
fn exec_fuel_bounds_work() {
    let mut g = Grammar::new();
    let a = g.literal("a");
    let many = g.repeat(a);

    let limits = FuelLimits::new().exec_fuel(5);
    let err = match_at(&g, many, "aaaaaaaa", 0, limits, &mut NoopTracer).unwrap_err();
    assert_eq!(err, RuntimeError::ExecFuelExhausted);
}

#[test]
fn recursion_limit_bounds_depth() {
    // list ::= "a" list?
    let mut g = Grammar::new();
    let a = g.literal("a");
    let placeholder = g.reference("list");
    let rest = g.optional(placeholder);
    let list = g.sequence([a, rest]);
    g.children_mut(rest)[0] = list;

    let input = "a".repeat(50);
    let limits = FuelLimits::new().recursion_limit(20);
    let err = match_at(&g, list, &input, 0, limits, &mut NoopTracer).unwrap_err();
    assert_eq!(err, RuntimeError::RecursionLimitExceeded);

    let ok = match_at(&g, list, &input, 0, FuelLimits::default(), &mut NoopTracer).unwrap();
    assert_eq!(ok.matched.map(|m| m.end), Some(50));
}

#[test]
fn failed_alternatives_leave_no_nodes_behind() {
    let mut g = Grammar::new();
    let a = g.literal("a");
    let b = g.literal("b");
    let c = g.literal("c");
    let ab = g.sequence([a, b]);
    let ac = g.sequence([a, c]);
    let either = g.choice([ab, ac]);

    let m = run(&g, either, "ac").matched.unwrap();
    let root = m.tree.root();
    assert_eq!(m.tree.children(root).len(), 2);
    assert_eq!(m.tree.join_leaves(root, ""), "ac");
    assert_eq!(m.tree.grammar_node(root), ac);
}
