//! Integration tests for the parsing module.
//!
//! End-to-end scenarios run `parse` then `render`; property tests cover the
//! splitter, classifier and delimiter rules over generated input.


use pretty_assertions::assert_eq;

use crate::element::render;
use crate::parsing::{
    MarkdownError, ParseError,
    blocks::{BlockKind, block_to_block_kind},
    markdown_to_html, parse,
    snapshot::{invariants, outline},
};

fn to_html(md: &str) -> String {
    let root = parse(md).unwrap();
    invariants(&root);
    render(&root).unwrap()
}

#[test]
fn heading_document() {
    assert_eq!(to_html("# Hello"), "<div><h1>Hello</h1></div>");
}

#[test]
fn paragraph_with_bold_and_code() {
    assert_eq!(
        to_html("This is **text** with `code`"),
        "<div><p>This is <b>text</b> with <code>code</code></p></div>"
    );
}

#[test]
fn unmatched_bold_fails_whole_parse() {
    assert_eq!(
        parse("# Fine\n\n**bold text"),
        Err(ParseError::UnmatchedDelimiter {
            delimiter: "**".into(),
            text: "**bold text".into(),
        })
    );
}

#[test]
fn numbering_gap_is_paragraph() {
    assert_eq!(block_to_block_kind("1. A\n3. B"), BlockKind::Paragraph);
    assert_eq!(to_html("1. A\n3. B"), "<div><p>1. A 3. B</p></div>");
}

#[test]
fn code_block_document() {
    assert_eq!(
        to_html("```\ncode\n```"),
        "<div><pre><code>code\n</code></pre></div>"
    );
}

#[test]
fn multiple_paragraphs() {
    let md = "
This is **bolded** paragraph
text in a p
tag here

This is another paragraph with _italic_ text and `code` here
";
    assert_eq!(
        to_html(md),
        "<div><p>This is <b>bolded</b> paragraph text in a p tag here</p><p>This is another paragraph with <i>italic</i> text and <code>code</code> here</p></div>"
    );
}

#[test]
fn code_block_keeps_inline_markers() {
    let md = "
```
This is text that _should_ remain
the **same** even with inline stuff
```
";
    assert_eq!(
        to_html(md),
        "<div><pre><code>This is text that _should_ remain\nthe **same** even with inline stuff\n</code></pre></div>"
    );
}

#[test]
fn all_heading_levels() {
    let md = "# H1\n\n## H2\n\n### H3\n\n#### H4\n\n##### H5\n\n###### H6";
    assert_eq!(
        to_html(md),
        "<div><h1>H1</h1><h2>H2</h2><h3>H3</h3><h4>H4</h4><h5>H5</h5><h6>H6</h6></div>"
    );
}

#[test]
fn links_and_images_in_paragraph() {
    assert_eq!(
        to_html("Check out this ![cool image](https://example.com/image.jpg) and visit [our site](https://example.com)."),
        r#"<div><p>Check out this <img src="https://example.com/image.jpg" alt="cool image"></img> and visit <a href="https://example.com">our site</a>.</p></div>"#
    );
}

#[test]
fn mixed_document_structure() {
    let md = "# Main Title

Key features include:

- Easy to use
- Fast processing

1. Download package
2. Install it

```bash
npm install package
```

> Note: Read the docs first.";

    let root = parse(md).unwrap();
    invariants(&root);
    assert_eq!(
        outline(&root),
        r#"div
  h1
    "Main Title"
  p
    "Key features include:"
  ul
    li
      "Easy to use"
    li
      "Fast processing"
  ol
    li
      "Download package"
    li
      "Install it"
  pre
    code "npm install package\n"
  blockquote
    "Note: Read the docs first."
"#
    );
}

#[test]
fn empty_and_blank_documents() {
    assert_eq!(to_html(""), "<div></div>");
    assert_eq!(to_html("   \n\n\t  "), "<div></div>");
}

#[test]
fn quote_document_keeps_newlines() {
    assert_eq!(
        to_html("> This is a quote\n> that also spans\n> multiple lines"),
        "<div><blockquote>This is a quote\nthat also spans\nmultiple lines</blockquote></div>"
    );
}

#[test]
fn markdown_to_html_wraps_parse_errors() {
    let err = markdown_to_html("an _open italic").unwrap_err();
    assert!(matches!(
        err,
        MarkdownError::Parse(ParseError::UnmatchedDelimiter { .. })
    ));
    assert_eq!(
        err.to_string(),
        "Unmatched delimiter '_' in text: an _open italic"
    );
}

#[test]
fn repeated_render_is_identical() {
    let md = "# T\n\n- a **b**\n- [c](d)\n\n> e";
    let first = markdown_to_html(md).unwrap();
    let second = markdown_to_html(md).unwrap();
    assert_eq!(first, second);
}
