/// Blockquote block type with owned delimiter constant.
///
/// Only a single quote level is recognised; a `>>` line is one level whose
/// text starts with `>`.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix character.
    pub const PREFIX: char = '>';

    pub fn is_quote_line(line: &str) -> bool {
        line.starts_with(Self::PREFIX)
    }

    /// Removes the leading `>` and at most one following space.
    ///
    /// Lines without a prefix are returned unchanged.
    pub fn strip_prefix(line: &str) -> &str {
        match line.strip_prefix(Self::PREFIX) {
            Some(rest) => rest.strip_prefix(' ').unwrap_or(rest),
            None => line,
        }
    }
}
