//! Flattening of the nested option tree into point-of-interest records.

use crate::document::OptionNode;
use crate::poi::PointOfInterest;
use crate::purity::normalize_purity;

/// Name given to records when neither the node nor any ancestor is named.
pub const FALLBACK_NAME: &str = "Unknown";

/// Collects every valid marker under `node` into a flat list.
///
/// Each node's effective name is its own `name`, else the name inherited from
/// its ancestors, else [`FALLBACK_NAME`]. Its markers are emitted under that
/// name before any of its children are visited, and children are visited in
/// array order (depth-first pre-order).
///
/// A marker whose `x`, `y` or `z` is not a JSON number is skipped. Purity is
/// taken from the marker if it carries one, otherwise from the node. A node
/// without its own purity label inherits its parent's, the same way names
/// flow down. An unknown label leaves the record without a purity.
///
/// The walk itself keeps its pending nodes on a heap-allocated stack rather
/// than recursing. Building the [`OptionNode`] tree in `Document::from_json`
/// is still recursive.
#[must_use]
pub fn extract<'a>(
    node: Option<&'a OptionNode>,
    inherited_name: Option<&'a str>,
) -> Vec<PointOfInterest> {
    let Some(root) = node else {
        return Vec::new();
    };

    let mut records = Vec::new();
    let mut dropped = 0usize;
    let mut stack: Vec<Frame<'a>> = vec![Frame::root(root, inherited_name)];

    while let Some(Frame { node: current, name, purity }) = stack.pop() {
        if let Some(markers) = &current.markers {
            for marker in markers {
                let Some(location) = marker.location() else {
                    dropped += 1;
                    continue;
                };
                let label = marker.purity.as_deref().or(purity);
                records.push(PointOfInterest {
                    name: name.to_owned(),
                    purity: normalize_purity(label),
                    location,
                });
            }
        }

        if let Some(children) = &current.children {
            // Reversed so the first child is popped next.
            for child in children.iter().rev() {
                stack.push(Frame::child(child, name, purity));
            }
        }
    }

    if dropped > 0 {
        tracing::debug!(
            dropped,
            kept = records.len(),
            "skipped markers with non-numeric coordinates"
        );
    }

    records
}

/// A pending node together with the name and purity label it resolved to.
struct Frame<'a> {
    node: &'a OptionNode,
    name: &'a str,
    purity: Option<&'a str>,
}

impl<'a> Frame<'a> {
    fn root(node: &'a OptionNode, inherited_name: Option<&'a str>) -> Self {
        Self {
            node,
            name: node
                .display_name
                .as_deref()
                .or(inherited_name)
                .unwrap_or(FALLBACK_NAME),
            purity: node.purity.as_deref(),
        }
    }

    fn child(node: &'a OptionNode, parent_name: &'a str, parent_purity: Option<&'a str>) -> Self {
        Self {
            node,
            name: node.display_name.as_deref().unwrap_or(parent_name),
            purity: node.purity.as_deref().or(parent_purity),
        }
    }
}

#[cfg(test)]
#[path = "extract_test.rs"]
mod tests;
