//! Plain text rendering for document trees.

use crate::model::Node;

/// Convert a tree to plain text.
///
/// Text payloads are concatenated unescaped in document order, with image
/// alt text in place of images. No markup is emitted.
pub fn to_text(node: &Node) -> String {
    node.plain_text()
}
