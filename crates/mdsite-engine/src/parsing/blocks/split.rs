/// The literal boundary between blocks.
pub const BLOCK_SEPARATOR: &str = "\n\n";

/// Splits a document into trimmed, non-empty block strings in document order.
///
/// Blocks are separated by a blank line (two consecutive newlines). Single
/// newlines inside a block are kept. An empty or whitespace-only document
/// yields no blocks.
pub fn markdown_to_blocks(markdown: &str) -> Vec<&str> {
    markdown
        .split(BLOCK_SEPARATOR)
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn splits_on_blank_lines() {
        let md = "
This is **bolded** paragraph

This is another paragraph with _italic_ text and `code` here
This is the same paragraph on a new line

- This is a list
- with items
";
        assert_eq!(
            markdown_to_blocks(md),
            vec![
                "This is **bolded** paragraph",
                "This is another paragraph with _italic_ text and `code` here\nThis is the same paragraph on a new line",
                "- This is a list\n- with items",
            ]
        );
    }

    #[test]
    fn excess_newlines_produce_no_empty_blocks() {
        assert_eq!(
            markdown_to_blocks("# Heading\n\n\n\n\nParagraph"),
            vec!["# Heading", "Paragraph"]
        );
    }

    #[test]
    fn blocks_are_trimmed() {
        assert_eq!(
            markdown_to_blocks("  \t padded  \n\n\n  also padded\t"),
            vec!["padded", "also padded"]
        );
    }

    #[test]
    fn duplicates_are_kept() {
        assert_eq!(markdown_to_blocks("same\n\nsame"), vec!["same", "same"]);
    }

    #[test]
    fn empty_and_whitespace_documents() {
        assert!(markdown_to_blocks("").is_empty());
        assert!(markdown_to_blocks("   \n\n\t  ").is_empty());
    }
}
