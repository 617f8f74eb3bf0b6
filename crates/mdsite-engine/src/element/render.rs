use std::fmt::Write;

use super::{Attributes, ElementNode};

/// Structural problems that make a parent node unrenderable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidElement {
    /// A parent node without a tag name.
    MissingTag,
    /// A parent node whose children list is absent (not merely empty).
    MissingChildren { tag: String },
}

impl std::fmt::Display for InvalidElement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingTag => write!(f, "parent element must have a tag"),
            Self::MissingChildren { tag } => write!(f, "parent element <{tag}> must have children"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    #[error("Invalid element: {0}")]
    InvalidElement(InvalidElement),
}

/// Serializes a node and its subtree to markup, depth-first in preorder.
///
/// - Tagged leaf: `<tag attrs>value</tag>`
/// - Untagged leaf: the raw value
/// - Parent: `<tag attrs>`, each child in order, `</tag>`
///
/// Values and attribute values are emitted verbatim.
pub fn render(node: &ElementNode) -> Result<String, RenderError> {
    let mut out = String::new();
    render_into(node, &mut out)?;
    Ok(out)
}

fn render_into(node: &ElementNode, out: &mut String) -> Result<(), RenderError> {
    match node {
        ElementNode::Leaf {
            tag: None, value, ..
        } => out.push_str(value),
        ElementNode::Leaf {
            tag: Some(tag),
            value,
            attributes,
        } => {
            open_tag(out, tag, attributes);
            out.push_str(value);
            close_tag(out, tag);
        }
        ElementNode::Parent {
            tag,
            attributes,
            children,
        } => {
            let tag = tag
                .as_deref()
                .ok_or(RenderError::InvalidElement(InvalidElement::MissingTag))?;
            let children = children.as_deref().ok_or_else(|| {
                RenderError::InvalidElement(InvalidElement::MissingChildren {
                    tag: tag.to_string(),
                })
            })?;

            open_tag(out, tag, attributes);
            for child in children {
                render_into(child, out)?;
            }
            close_tag(out, tag);
        }
    }
    Ok(())
}

fn open_tag(out: &mut String, tag: &str, attributes: &Attributes) {
    out.push('<');
    out.push_str(tag);
    out.push_str(&attributes_to_html(attributes));
    out.push('>');
}

fn close_tag(out: &mut String, tag: &str) {
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}

/// Renders attributes as ` key="value"` pairs in insertion order.
///
/// An empty map renders as the empty string.
pub fn attributes_to_html(attributes: &Attributes) -> String {
    let mut out = String::new();
    for (key, value) in attributes {
        // Writing to a String cannot fail.
        let _ = write!(out, " {key}=\"{value}\"");
    }
    out
}
