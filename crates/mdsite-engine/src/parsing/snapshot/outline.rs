use crate::element::{ElementNode, render::attributes_to_html};

/// Renders a tree as one line per node, children indented by two spaces.
///
/// Tagged nodes show their tag and attributes; leaf values are quoted with
/// escapes so whitespace and newlines stay visible.
///
/// ```text
/// div
///   p
///     "See "
///     a href="x" "here"
/// ```
pub fn outline(root: &ElementNode) -> String {
    let mut out = String::new();
    write_node(root, 0, &mut out);
    out
}

fn write_node(node: &ElementNode, depth: usize, out: &mut String) {
    out.push_str(&"  ".repeat(depth));
    match node {
        ElementNode::Leaf {
            tag,
            value,
            attributes,
        } => {
            if let Some(tag) = tag {
                out.push_str(tag);
                out.push_str(&attributes_to_html(attributes));
                out.push(' ');
            }
            out.push_str(&format!("{value:?}"));
            out.push('\n');
        }
        ElementNode::Parent {
            tag,
            attributes,
            children,
        } => {
            out.push_str(tag.as_deref().unwrap_or("<missing tag>"));
            out.push_str(&attributes_to_html(attributes));
            match children {
                Some(children) => {
                    out.push('\n');
                    for child in children {
                        write_node(child, depth + 1, out);
                    }
                }
                None => out.push_str(" <missing children>\n"),
            }
        }
    }
}
