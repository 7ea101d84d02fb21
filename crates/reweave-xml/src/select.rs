//! Node selection over a [`Document`].
//!
//! Covers the two lookups this workspace needs: all descendants with a given
//! element name, and the first descendant with a given element name and
//! identifying attribute value.

use crate::dom::{Document, NodeId};

/// Returns every descendant of `scope` named `tag`, in document order.
///
/// `scope` itself is never included.
pub fn elements_by_tag(document: &Document, scope: NodeId, tag: &str) -> Vec<NodeId> {
    let mut found = Vec::new();
    collect(document, scope, tag, &mut found);
    found
}

/// Returns the first descendant of `scope` named `tag` whose `id_attr`
/// attribute equals `value`.
pub fn element_by_id(
    document: &Document,
    scope: NodeId,
    tag: &str,
    id_attr: &str,
    value: &str,
) -> Option<NodeId> {
    elements_by_tag(document, scope, tag)
        .into_iter()
        .find(|&node| document.attribute(node, id_attr) == Some(value))
}

fn collect(document: &Document, node: NodeId, tag: &str, found: &mut Vec<NodeId>) {
    for &child in document.children(node) {
        if document.tag(child) == tag {
            found.push(child);
        }
        collect(document, child, tag, found);
    }
}
