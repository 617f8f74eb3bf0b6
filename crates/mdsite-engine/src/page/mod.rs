//! # Page Assembly
//!
//! Turns one markdown document into a complete HTML page using a template.
//!
//! Templates contain two placeholders, [`TITLE_PLACEHOLDER`] and
//! [`CONTENT_PLACEHOLDER`]. The title comes from the document's first
//! level-1 heading line; the content is the rendered document tree.
//! Root-relative `href="/` and `src="/` attributes are then rebased onto the
//! site's base path so the output can be served from a sub-directory.

use crate::parsing::{MarkdownError, markdown_to_html};

pub const TITLE_PLACEHOLDER: &str = "{{ Title }}";
pub const CONTENT_PLACEHOLDER: &str = "{{ Content }}";

const TITLE_PREFIX: &str = "# ";
const ROOT_RELATIVE_ATTRIBUTES: [&str; 2] = ["href=\"/", "src=\"/"];

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PageError {
    #[error("No h1 header found in markdown")]
    MissingTitle,
    #[error(transparent)]
    Markdown(#[from] MarkdownError),
}

/// Returns the text of the first line that starts with `"# "`, trimmed.
///
/// Lines are scanned in document order regardless of block boundaries, so
/// `## Sub` headings are skipped and a `#` inside a code fence still counts.
pub fn extract_title(markdown: &str) -> Result<String, PageError> {
    markdown
        .lines()
        .find_map(|line| line.strip_prefix(TITLE_PREFIX))
        .map(|title| title.trim().to_string())
        .ok_or(PageError::MissingTitle)
}

/// Fills the template placeholders and rebases root-relative links.
///
/// A `basepath` of `/` leaves links untouched.
pub fn apply_template(template: &str, title: &str, content: &str, basepath: &str) -> String {
    let mut page = template
        .replace(TITLE_PLACEHOLDER, title)
        .replace(CONTENT_PLACEHOLDER, content);

    for attribute in ROOT_RELATIVE_ATTRIBUTES {
        // `href="/` -> `href="` + basepath
        let rebased = format!("{}{basepath}", &attribute[..attribute.len() - 1]);
        page = page.replace(attribute, &rebased);
    }
    page
}

/// Renders a markdown document into a full page.
///
/// # Errors
/// Parse and render failures, then [`PageError::MissingTitle`] when the
/// document has no level-1 heading.
pub fn generate_page(markdown: &str, template: &str, basepath: &str) -> Result<String, PageError> {
    let content = markdown_to_html(markdown)?;
    let title = extract_title(markdown)?;
    Ok(apply_template(template, &title, &content, basepath))
}
