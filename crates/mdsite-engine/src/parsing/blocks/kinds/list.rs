/// Unordered list block type: every line is an item starting with `- `.
pub struct UnorderedList;

impl UnorderedList {
    pub const MARKER: &'static str = "- ";

    pub fn is_item(line: &str) -> bool {
        line.starts_with(Self::MARKER)
    }

    /// Item text after the marker.
    pub fn item_text(line: &str) -> &str {
        line.strip_prefix(Self::MARKER).unwrap_or(line)
    }
}

/// Ordered list block type: line `i` starts with `"{i + 1}. "`.
pub struct OrderedList;

impl OrderedList {
    /// Separator between an item number and its text.
    pub const SEPARATOR: &'static str = ". ";

    /// The exact prefix expected on the 0-based line `index`.
    pub fn marker(index: usize) -> String {
        format!("{}{}", index + 1, Self::SEPARATOR)
    }

    /// Whether the lines are numbered exactly 1, 2, 3, ... with no gaps or repeats.
    pub fn is_numbered<'a>(lines: impl IntoIterator<Item = &'a str>) -> bool {
        lines
            .into_iter()
            .enumerate()
            .all(|(i, line)| line.starts_with(&Self::marker(i)))
    }

    /// Item text after the first `". "` on the line.
    pub fn item_text(line: &str) -> Option<&str> {
        line.find(Self::SEPARATOR)
            .map(|i| &line[i + Self::SEPARATOR.len()..])
    }
}
