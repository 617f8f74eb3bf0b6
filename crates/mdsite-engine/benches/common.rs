// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_markdown_content(size: usize) -> String {
    let base = "# Title\n\n## Section\n\nParagraph with **bold**, _italic_ and `code`.\n\n- Bullet point\n- Another [item](/item)\n\n1. First\n2. Second\n\n> A quote\n> over two lines\n\n```rust\nfn example() {\n    println!(\"Hello\");\n}\n```\n\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_site_page(sections: usize) -> String {
    let mut content = String::from("# Site Page\n\n");

    for section in 0..sections {
        content.push_str(&format!("## Section {section}\n\n"));
        content.push_str(&generate_inline_paragraph(4));
        content.push_str("\n\n");

        for i in 0..3 {
            content.push_str(&format!("- Item {i} with **emphasis** in section {section}\n"));
        }
        content.push('\n');

        // code block occasionally
        if section % 3 == 0 {
            content.push_str("```rust\nfn benchmark_function() {\n    let value = 42;\n    println!(\"{}\", value);\n}\n```\n\n");
        }
    }

    content
}

/// A single paragraph dense with inline markup, `sentences` lines long.
#[allow(dead_code)]
pub fn generate_inline_paragraph(sentences: usize) -> String {
    (0..sentences)
        .map(|i| {
            format!(
                "Sentence {i} has **bold**, _italic_, `code`, a [link](/page/{i}) and ![an image](/img/{i}.png)."
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
