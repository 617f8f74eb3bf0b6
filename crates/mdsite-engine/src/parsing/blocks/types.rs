use std::fmt;
use std::str::FromStr;

use crate::parsing::error::ParseError;

/// The syntactic type of a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockKind {
    /// Default when no other block type matches.
    Paragraph,
    /// `#` to `######` followed by a space and content.
    Heading,
    /// Fenced with ```` ``` ```` on the first and last line.
    Code,
    /// Every line starts with `>`.
    Quote,
    /// Every line starts with `- `.
    UnorderedList,
    /// Lines numbered `1. `, `2. `, ... in order.
    OrderedList,
}

impl BlockKind {
    pub const ALL: [BlockKind; 6] = [
        BlockKind::Paragraph,
        BlockKind::Heading,
        BlockKind::Code,
        BlockKind::Quote,
        BlockKind::UnorderedList,
        BlockKind::OrderedList,
    ];

    pub fn name(self) -> &'static str {
        match self {
            BlockKind::Paragraph => "paragraph",
            BlockKind::Heading => "heading",
            BlockKind::Code => "code",
            BlockKind::Quote => "quote",
            BlockKind::UnorderedList => "unordered_list",
            BlockKind::OrderedList => "ordered_list",
        }
    }
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BlockKind {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BlockKind::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| ParseError::UnsupportedBlockType(s.to_string()))
    }
}

/// A trimmed, non-empty slice of the document together with its type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block<'a> {
    pub text: &'a str,
    pub kind: BlockKind,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for kind in BlockKind::ALL {
            assert_eq!(kind.to_string().parse::<BlockKind>(), Ok(kind));
        }
    }

    #[test]
    fn unknown_name_is_unsupported() {
        assert_eq!(
            "table".parse::<BlockKind>(),
            Err(ParseError::UnsupportedBlockType("table".into()))
        );
    }
}
