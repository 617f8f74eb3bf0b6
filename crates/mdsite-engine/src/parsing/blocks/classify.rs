use super::{
    kinds::{BlockQuote, CodeFence, Heading, OrderedList, UnorderedList},
    types::BlockKind,
};

/// Classifies whole blocks into a [`BlockKind`].
///
/// Checks run in a fixed order and the first match wins: heading, code,
/// quote, unordered list, ordered list, then paragraph. Heading markers and
/// fences are checked before the line-by-line rules, so a fenced block that
/// happens to contain `>` lines stays code.
pub struct MarkdownBlockClassifier;

impl MarkdownBlockClassifier {
    pub fn classify(&self, block: &str) -> BlockKind {
        if Heading::parse(block).is_some() {
            return BlockKind::Heading;
        }
        if CodeFence::is_fenced(block) {
            return BlockKind::Code;
        }
        if block.split('\n').all(BlockQuote::is_quote_line) {
            return BlockKind::Quote;
        }
        if block.split('\n').all(UnorderedList::is_item) {
            return BlockKind::UnorderedList;
        }
        if OrderedList::is_numbered(block.split('\n')) {
            return BlockKind::OrderedList;
        }
        BlockKind::Paragraph
    }
}

/// Classifies a single block string.
pub fn block_to_block_kind(block: &str) -> BlockKind {
    MarkdownBlockClassifier.classify(block)
}
