use super::{blocks::BlockKind, inline::SpanKind};

/// Errors raised while turning markdown into an element tree.
///
/// All of them abort the whole document; there is no partial result.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// A plain span holds an odd number of occurrences of a delimiter.
    #[error("Unmatched delimiter '{delimiter}' in text: {text}")]
    UnmatchedDelimiter { delimiter: String, text: String },
    /// A link or image span reached node construction without a URL.
    #[error("{kind:?} span must have a URL")]
    MissingUrl { kind: SpanKind },
    /// A block paired with a kind whose syntax it does not have.
    #[error("Block is not a well-formed {kind}: {block}")]
    MalformedBlock { kind: BlockKind, block: String },
    /// A block type name with no corresponding builder.
    #[error("Unsupported block type: {0}")]
    UnsupportedBlockType(String),
}
