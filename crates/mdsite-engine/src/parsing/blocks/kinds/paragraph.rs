/// Paragraph block type.
///
/// Paragraphs have no delimiters - they are the default block when no other
/// block type matches. Line breaks inside a paragraph collapse to spaces
/// before inline parsing.
pub struct Paragraph;

impl Paragraph {
    pub fn join_lines(block: &str) -> String {
        block.replace('\n', " ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newlines_become_spaces() {
        assert_eq!(Paragraph::join_lines("one\ntwo\nthree"), "one two three");
    }
}
