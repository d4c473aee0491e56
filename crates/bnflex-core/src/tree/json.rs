use serde::Serialize;

use super::{NodeRef, ParseTree};

/// Serializable view of a subtree.
#[derive(Debug, Serialize)]
pub struct JsonNode<'t> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<&'t str>,
    pub value: &'t str,
    pub start: usize,
    pub end: usize,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<JsonNode<'t>>,
}

impl ParseTree {
    pub fn json_view(&self, node: NodeRef) -> JsonNode<'_> {
        let span = self.span(node);
        JsonNode {
            name: self.name(node),
            value: self.value(node),
            start: span.start,
            end: span.end,
            children: self.children(node).iter().map(|&c| self.json_view(c)).collect(),
        }
    }

    pub fn to_json(&self, node: NodeRef, pretty: bool) -> serde_json::Result<String> {
        let view = self.json_view(node);
        if pretty {
            serde_json::to_string_pretty(&view)
        } else {
            serde_json::to_string(&view)
        }
    }
}
