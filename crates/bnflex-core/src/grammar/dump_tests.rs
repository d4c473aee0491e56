use super::Grammar;

#[test]
fn named_nodes_become_rules() {
    let mut g = Grammar::new();
    let digit = g.char_range('0', '9', false);
    let digit = g.named(digit, "digit");
    let digits = g.repeat(digit);
    let minus = g.literal("-");
    let minus = g.named(minus, "'-");
    let sign = g.optional(minus);
    let number = g.sequence([sign, digits]);
    let number = g.named(number, "number");

    insta::assert_snapshot!(g.dump(number), @r#"
    number ::= "-"? digit+
    digit ::= [0-9]
    "#);
}

#[test]
fn cycles_print_each_rule_once() {
    let mut g = Grammar::new();
    let open = g.literal("(");
    let close = g.literal(")");
    let placeholder = g.reference("list");
    let items = g.repeat(placeholder);
    let many = g.optional(items);
    let list = g.sequence([open, many, close]);
    let list = g.named(list, "list");
    g.children_mut(items)[0] = list;

    insta::assert_snapshot!(g.dump(list), @r#"list ::= "(" list* ")""#);
}

#[test]
fn precedence_adds_parentheses() {
    let mut g = Grammar::new();
    let a = g.literal("a");
    let b = g.literal("b");
    let either = g.choice([a, b]);
    let eof = g.end_of_input();
    let not_eof = g.negation(eof);
    let first = g.sequence([either, not_eof]);
    let other = g.char_set("\"\\", true);
    let root = g.choice([first, other]);
    let root = g.named(root, "root");

    insta::assert_snapshot!(g.dump(root), @r#"root ::= ("a" | "b") !EOF | [^"\\]"#);
}

#[test]
fn class_metacharacters_are_escaped() {
    let mut g = Grammar::new();
    let set = g.char_set("a-]\n", false);
    let set = g.named(set, "odd");

    insta::assert_snapshot!(g.dump(set), @r"odd ::= [a\-\]\n]");
}
