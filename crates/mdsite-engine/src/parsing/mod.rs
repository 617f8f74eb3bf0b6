pub mod blocks;
pub mod error;
pub mod inline;
pub mod snapshot;

#[cfg(test)]
mod tests;

use crate::element::{ElementNode, RenderError, render};

use blocks::{Block, MarkdownBlockClassifier, block_to_node, markdown_to_blocks};

pub use error::ParseError;

/// Tag of the element that wraps every parsed document.
pub const DOCUMENT_TAG: &str = "div";

/// Parse or render failure for a whole document.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MarkdownError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Render(#[from] RenderError),
}

/// Parses a markdown document into an element tree rooted at a `<div>`.
///
/// The root has one child per block, in document order. An empty document
/// gives a root with no children.
///
/// # Errors
/// The first [`ParseError`] raised by any block; no partial tree is returned.
pub fn parse(markdown: &str) -> Result<ElementNode, ParseError> {
    let classifier = MarkdownBlockClassifier;
    let blocks = markdown_to_blocks(markdown);
    log::debug!("parsing document with {} blocks", blocks.len());

    let mut children = Vec::with_capacity(blocks.len());
    for text in blocks {
        let kind = classifier.classify(text);
        log::trace!("classified block as {kind}: {text:?}");
        children.push(block_to_node(Block { text, kind })?);
    }

    Ok(ElementNode::parent(DOCUMENT_TAG, children))
}

/// Convenience: parse then render to markup.
pub fn markdown_to_html(markdown: &str) -> Result<String, MarkdownError> {
    let root = parse(markdown)?;
    Ok(render(&root)?)
}
