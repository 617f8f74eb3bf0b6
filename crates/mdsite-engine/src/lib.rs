pub mod element;
pub mod io;
pub mod page;
pub mod parsing;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use element::{Attributes, ElementNode, InvalidElement, RenderError, render};
pub use page::{PageError, apply_template, extract_title, generate_page};
pub use parsing::{MarkdownError, ParseError, markdown_to_html, parse};
