/// ATX heading block type with owned marker constants.
pub struct Heading;

impl Heading {
    /// The heading marker character, repeated once per level.
    pub const MARKER: char = '#';
    /// Deepest supported level (`<h6>`).
    pub const MAX_LEVEL: usize = 6;

    /// Splits a heading block into its level and content.
    ///
    /// A heading is 1 to 6 markers, one space, then at least one more
    /// character. The content is everything after that space, unmodified.
    ///
    /// # Returns
    /// `None` when the block is not a heading (too many markers, no space,
    /// or nothing after the space).
    pub fn parse(block: &str) -> Option<(usize, &str)> {
        // the marker is ASCII, so the count is also a byte offset
        let level = block.chars().take_while(|&c| c == Self::MARKER).count();
        if !(1..=Self::MAX_LEVEL).contains(&level) {
            return None;
        }
        let content = block[level..].strip_prefix(' ')?;
        if content.is_empty() {
            return None;
        }
        Some((level, content))
    }

    /// The HTML tag for a heading level, `h1` to `h6`.
    pub fn tag(level: usize) -> String {
        format!("h{level}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("# Heading", Some((1, "Heading")))]
    #[case("### Three", Some((3, "Three")))]
    #[case("###### Six", Some((6, "Six")))]
    #[case("#  extra space", Some((1, " extra space")))]
    #[case("####### Seven", None)]
    #[case("#NoSpace", None)]
    #[case("#", None)]
    #[case("Not # a heading", None)]
    fn parse_heading(#[case] block: &str, #[case] expected: Option<(usize, &str)>) {
        assert_eq!(Heading::parse(block), expected);
    }

    #[test]
    fn tag_for_level() {
        assert_eq!(Heading::tag(1), "h1");
        assert_eq!(Heading::tag(6), "h6");
    }
}
