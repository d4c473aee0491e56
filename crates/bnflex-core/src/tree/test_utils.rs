use std::sync::Arc;

use super::{NodeRef, ParseTree, Span, TreeBuilder};
use crate::Grammar;

fn label(name: &str) -> Option<Arc<str>> {
    Some(Arc::from(name))
}

/// Tree over `a,b;c`:
///
/// ```text
/// list
///   item "a"
///   sep ","
///   item "b"
///   _ ";"
///   group
///     item "c"
///   gap ""
/// ```
pub fn sample_tree() -> ParseTree {
    let mut grammar = Grammar::new();
    let id = grammar.literal("");
    let mut b = TreeBuilder::new();
    let a = b.leaf(id, label("item"), Span::new(0, 1));
    let comma = b.leaf(id, label("sep"), Span::new(1, 2));
    let bee = b.leaf(id, label("item"), Span::new(2, 3));
    let semi = b.leaf(id, None, Span::new(3, 4));
    let c = b.leaf(id, label("item"), Span::new(4, 5));
    let group = b.interior(id, label("group"), Span::new(4, 5), vec![c]);
    let gap = b.leaf(id, label("gap"), Span::new(5, 5));
    let root = b.interior(
        id,
        label("list"),
        Span::new(0, 5),
        vec![a, comma, bee, semi, group, gap],
    );
    b.finish("a,b;c", root)
}

/// Direct children of the root, by position.
pub fn top(tree: &ParseTree, index: usize) -> NodeRef {
    tree.children(tree.root())[index]
}

pub fn values(tree: &ParseTree, nodes: &[NodeRef]) -> Vec<String> {
    nodes.iter().map(|&n| tree.value(n).to_string()).collect()
}

pub fn dump(tree: &ParseTree) -> String {
    super::TreePrinter::new(tree).dump()
}
