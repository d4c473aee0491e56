use bnflex_core::{Grammar, NodeKind};

use crate::BnfCompiler;
use crate::analyze::RuleTable;
use crate::lower::lower;

fn lowered(source: &str) -> (Grammar, RuleTable) {
    let tree = BnfCompiler::global().parse(source).unwrap();
    lower(tree).unwrap()
}

#[test]
fn rule_bodies_are_named_after_rules() {
    let (g, rules) = lowered(r#"root ::= "a" "b""#);
    let root = rules.get("root").unwrap();

    assert_eq!(g[root].name(), Some("root"));
    let NodeKind::Sequence(children) = g[root].kind() else {
        panic!("expected a sequence, got {:?}", g[root].kind());
    };
    let names: Vec<_> = children.iter().map(|&c| g[c].name()).collect();
    assert_eq!(names, [Some("'a"), Some("'b")]);
}

#[test]
fn references_are_shared_per_name() {
    let (g, rules) = lowered("root ::= a a b");
    let root = rules.get("root").unwrap();

    let children = g[root].children();
    assert_eq!(children[0], children[1]);
    assert_ne!(children[1], children[2]);
    assert_eq!(g[children[0]].kind(), &NodeKind::Reference("a".to_string()));
}

#[test]
fn aliases_stay_unnamed_references() {
    let (g, rules) = lowered("root ::= other");
    let root = rules.get("root").unwrap();

    assert_eq!(g[root].name(), None);
    assert!(g[root].kind().is_reference());
}

#[test]
fn modifier_binds_tighter_than_negation() {
    let (g, rules) = lowered(r#"root ::= !"a"+"#);
    let root = rules.get("root").unwrap();

    insta::assert_snapshot!(g.dump(root), @r#"root ::= !("a"+)"#);
    let NodeKind::Negation(inner) = g[root].kind() else {
        panic!("expected a negation");
    };
    assert!(matches!(g[*inner].kind(), NodeKind::Repeat(_)));
}

#[test]
fn star_is_optional_repeat() {
    let (g, rules) = lowered(r#"root ::= "a"*"#);
    let root = rules.get("root").unwrap();

    let NodeKind::Optional(inner) = g[root].kind() else {
        panic!("expected an optional");
    };
    assert!(matches!(g[*inner].kind(), NodeKind::Repeat(_)));
}

#[test]
fn nested_groups_fold_inside_out() {
    let (g, rules) = lowered(r#"root ::= ("a" ("b" | "c")+)? "d""#);
    let root = rules.get("root").unwrap();

    insta::assert_snapshot!(g.dump(root), @r#"root ::= ("a" ("b" | "c")+)? "d""#);
}

#[test]
fn char_classes() {
    let (g, rules) = lowered(r#"root ::= [^a-f] [^] [xyz] [\]]"#);
    let root = rules.get("root").unwrap();

    let kinds: Vec<&NodeKind> = g[root].children().iter().map(|&c| g[c].kind()).collect();
    assert_eq!(
        kinds[0],
        &NodeKind::CharRange {
            lo: 'a',
            hi: 'f',
            negate: true
        }
    );
    assert!(matches!(kinds[1], NodeKind::CharSet { chars, negate: true } if chars.is_empty()));
    assert!(matches!(kinds[2], NodeKind::CharSet { chars, negate: false } if chars.len() == 3));
    assert!(g[root].children().iter().all(|&c| g[c].name().is_none()));
    insta::assert_snapshot!(g.dump(root), @r"root ::= [^a-f] [^] [xyz] [\]]");
}
