use crate::element::ElementNode;
use crate::parsing::DOCUMENT_TAG;

/// Validates the shape of a parsed document tree.
///
/// Asserts that:
/// - The root is a `div` parent
/// - Every parent has a tag and a children list
/// - Every `a` leaf has an `href`, every `img` leaf has `src` and `alt` and an empty value
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check(root: &ElementNode) {
    assert!(
        matches!(root, ElementNode::Parent { .. }) && root.tag() == Some(DOCUMENT_TAG),
        "document root must be a <{DOCUMENT_TAG}> parent: {root:?}"
    );
    check_node(root);
}

fn check_node(node: &ElementNode) {
    match node {
        ElementNode::Parent { tag, children, .. } => {
            assert!(tag.is_some(), "parent without tag: {node:?}");
            let children = children
                .as_ref()
                .unwrap_or_else(|| panic!("parent without children: {node:?}"));
            for child in children {
                check_node(child);
            }
        }
        ElementNode::Leaf {
            tag,
            value,
            attributes,
        } => match tag.as_deref() {
            Some("a") => assert!(
                attributes.contains_key("href"),
                "link without href: {node:?}"
            ),
            Some("img") => {
                assert!(
                    attributes.contains_key("src") && attributes.contains_key("alt"),
                    "image without src/alt: {node:?}"
                );
                assert!(value.is_empty(), "image with a value: {node:?}");
            }
            _ => {}
        },
    }
}
