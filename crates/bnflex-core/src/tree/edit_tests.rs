use super::Replacement;
use super::test_utils::{dump, sample_tree, top, values};
use crate::Grammar;

#[test]
fn remove_detaches_subtree() {
    let mut tree = sample_tree();
    let group = top(&tree, 4);

    tree.remove(group);

    assert!(!tree.is_attached(group));
    assert_eq!(tree.parent(group), None);
    insta::assert_snapshot!(dump(&tree), @r#"
    list
      item "a"
      sep ","
      item "b"
      _ ";"
      gap ""
    "#);
}

#[test]
fn remove_root_is_noop() {
    let mut tree = sample_tree();
    let before = dump(&tree);

    tree.remove(tree.root());

    assert_eq!(dump(&tree), before);
}

#[test]
fn lift_children_splices_in_place() {
    let mut tree = sample_tree();
    let group = top(&tree, 4);
    let c = tree.children(group)[0];

    tree.lift_children(group);

    assert_eq!(tree.parent(c), Some(tree.root()));
    assert!(!tree.is_attached(group));
    insta::assert_snapshot!(dump(&tree), @r#"
    list
      item "a"
      sep ","
      item "b"
      _ ";"
      item "c"
      gap ""
    "#);
}

#[test]
fn replace_with_node_moves_replacement() {
    let mut tree = sample_tree();
    let semi = top(&tree, 3);
    let group = top(&tree, 4);

    tree.replace_with(semi, group);

    assert_eq!(tree.parent(group), Some(tree.root()));
    assert!(!tree.is_attached(semi));
    insta::assert_snapshot!(dump(&tree), @r#"
    list
      item "a"
      sep ","
      item "b"
      group
        item "c"
      gap ""
    "#);
}

#[test]
fn replace_root_promotes_replacement() {
    let mut tree = sample_tree();
    let group = top(&tree, 4);

    tree.replace_with(tree.root(), group);

    assert_eq!(tree.root(), group);
    assert_eq!(tree.parent(group), None);
    insta::assert_snapshot!(dump(&tree), @r#"
    group
      item "c"
    "#);
}

#[test]
fn replace_with_payload_keeps_shape() {
    let mut tree = sample_tree();
    let mut grammar = Grammar::new();
    let compiled = grammar.literal("x");
    let before = dump(&tree);
    let sep = top(&tree, 1);

    tree.replace_with(sep, Replacement::Payload(compiled));

    assert_eq!(tree.payload(sep), Some(compiled));
    assert_eq!(tree.payload(top(&tree, 0)), None);
    assert_eq!(dump(&tree), before);
}

#[test]
fn join_leaves_uses_overridden_values() {
    let mut tree = sample_tree();
    let root = tree.root();

    assert_eq!(tree.join_leaves(root, ""), "a,b;c");
    tree.set_value(top(&tree, 1), "|");
    assert_eq!(tree.join_leaves(root, "-"), "a-|-b-;-c-");
    assert_eq!(tree.value(top(&tree, 1)), "|");
    assert_eq!(tree.value(root), "a,b;c");
}

#[test]
fn join_leaves_on_leaf_is_its_value() {
    let tree = sample_tree();

    assert_eq!(tree.join_leaves(top(&tree, 0), "+"), "a");
}

#[test]
fn split_children_drops_delimiters() {
    let tree = sample_tree();

    let groups = tree.split_children(tree.root(), "sep");

    assert_eq!(groups.len(), 2);
    assert_eq!(values(&tree, &groups[0]), ["a"]);
    assert_eq!(values(&tree, &groups[1]), ["b", ";", "c", ""]);
}

#[test]
fn split_children_without_delimiter_is_one_group() {
    let tree = sample_tree();

    let groups = tree.split_children(tree.root(), "missing");

    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].len(), 6);
}

#[test]
fn split_children_keeps_empty_groups() {
    let tree = sample_tree();

    let groups = tree.split_children(tree.root(), "item");

    let sizes: Vec<usize> = groups.iter().map(Vec::len).collect();
    assert_eq!(sizes, [0, 1, 3]);
}
