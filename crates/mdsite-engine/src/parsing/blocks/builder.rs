use crate::element::ElementNode;
use crate::parsing::{
    error::ParseError,
    inline::{Span, SpanKind, text_to_spans},
};

use super::{
    kinds::{BlockQuote, CodeFence, Heading, OrderedList, Paragraph, UnorderedList},
    types::{Block, BlockKind},
};

/// Converts a classified block into its element node.
///
/// | Kind            | Node                                         |
/// |-----------------|----------------------------------------------|
/// | Heading         | `<hN>` with inline children                  |
/// | Code            | `<pre><code>` with the verbatim code         |
/// | Quote           | `<blockquote>` with inline children          |
/// | Paragraph       | `<p>` with inline children                   |
/// | UnorderedList   | `<ul>` of `<li>` items                       |
/// | OrderedList     | `<ol>` of `<li>` items                       |
///
/// # Errors
/// Inline failures from the block's content, and
/// [`ParseError::MalformedBlock`] for a heading block without heading syntax.
pub fn block_to_node(block: Block<'_>) -> Result<ElementNode, ParseError> {
    match block.kind {
        BlockKind::Heading => heading_to_node(block.text),
        BlockKind::Code => Ok(code_to_node(block.text)),
        BlockKind::Quote => quote_to_node(block.text),
        BlockKind::Paragraph => paragraph_to_node(block.text),
        BlockKind::UnorderedList => unordered_list_to_node(block.text),
        BlockKind::OrderedList => ordered_list_to_node(block.text),
    }
}

fn heading_to_node(text: &str) -> Result<ElementNode, ParseError> {
    let (level, content) = Heading::parse(text).ok_or_else(|| ParseError::MalformedBlock {
        kind: BlockKind::Heading,
        block: text.to_string(),
    })?;
    Ok(ElementNode::parent(
        Heading::tag(level),
        text_to_children(content)?,
    ))
}

fn code_to_node(text: &str) -> ElementNode {
    ElementNode::parent("pre", vec![ElementNode::leaf("code", CodeFence::content(text))])
}

fn quote_to_node(text: &str) -> Result<ElementNode, ParseError> {
    let joined = text
        .split('\n')
        .map(BlockQuote::strip_prefix)
        .collect::<Vec<_>>()
        .join("\n");
    Ok(ElementNode::parent("blockquote", text_to_children(&joined)?))
}

fn paragraph_to_node(text: &str) -> Result<ElementNode, ParseError> {
    let joined = Paragraph::join_lines(text);
    Ok(ElementNode::parent("p", text_to_children(&joined)?))
}

fn unordered_list_to_node(text: &str) -> Result<ElementNode, ParseError> {
    let items = text
        .split('\n')
        .map(|line| list_item(UnorderedList::item_text(line)))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(ElementNode::parent("ul", items))
}

fn ordered_list_to_node(text: &str) -> Result<ElementNode, ParseError> {
    let items = text
        .split('\n')
        .filter_map(OrderedList::item_text)
        .map(list_item)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(ElementNode::parent("ol", items))
}

fn list_item(text: &str) -> Result<ElementNode, ParseError> {
    Ok(ElementNode::parent("li", text_to_children(text)?))
}

/// Tokenizes inline markdown and converts every span into a node.
pub fn text_to_children(text: &str) -> Result<Vec<ElementNode>, ParseError> {
    text_to_spans(text)?.into_iter().map(span_to_node).collect()
}

/// Converts one inline span into a leaf node.
///
/// # Errors
/// [`ParseError::MissingUrl`] for a link or image span without a url.
pub fn span_to_node(span: Span) -> Result<ElementNode, ParseError> {
    let node = match span.kind {
        SpanKind::Plain => ElementNode::text(span.text),
        SpanKind::Bold => ElementNode::leaf("b", span.text),
        SpanKind::Italic => ElementNode::leaf("i", span.text),
        SpanKind::Code => ElementNode::leaf("code", span.text),
        SpanKind::Link => {
            let url = span.url.ok_or(ParseError::MissingUrl {
                kind: SpanKind::Link,
            })?;
            ElementNode::leaf("a", span.text).with_attribute("href", url)
        }
        SpanKind::Image => {
            let url = span.url.ok_or(ParseError::MissingUrl {
                kind: SpanKind::Image,
            })?;
            ElementNode::leaf("img", "")
                .with_attribute("src", url)
                .with_attribute("alt", span.text)
        }
    };
    Ok(node)
}
