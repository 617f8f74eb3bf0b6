use std::ops::Range;
use std::sync::OnceLock;

use regex::{Captures, Regex};

use super::{
    kinds::{Image, Link},
    types::{Span, SpanKind},
};

/// One `[text](url)` occurrence found in a plain span.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Bracketed {
    /// Byte range of the whole construct in the searched text.
    range: Range<usize>,
    text: String,
    url: String,
}

fn image_regex() -> &'static Regex {
    static IMAGE_REGEX: OnceLock<Regex> = OnceLock::new();
    IMAGE_REGEX.get_or_init(|| Regex::new(Image::PATTERN).expect("Invalid image regex"))
}

fn link_regex() -> &'static Regex {
    static LINK_REGEX: OnceLock<Regex> = OnceLock::new();
    LINK_REGEX.get_or_init(|| Regex::new(Link::PATTERN).expect("Invalid link regex"))
}

fn bracketed(caps: &Captures<'_>) -> Option<Bracketed> {
    let whole = caps.get(0)?;
    Some(Bracketed {
        range: whole.range(),
        text: caps.get(1)?.as_str().to_string(),
        url: caps.get(2)?.as_str().to_string(),
    })
}

fn find_images(text: &str) -> Vec<Bracketed> {
    image_regex()
        .captures_iter(text)
        .filter_map(|caps| bracketed(&caps))
        .collect()
}

/// Finds links left to right, skipping any candidate directly after `!`.
///
/// A skipped candidate resumes the search one byte after its `[`, so a
/// later link is still found exactly as a lookbehind match would find it.
fn find_links(text: &str) -> Vec<Bracketed> {
    let re = link_regex();
    let mut out = vec![];
    let mut pos = 0;

    while let Some(caps) = re.captures_at(text, pos) {
        let Some(found) = bracketed(&caps) else {
            break;
        };
        if text[..found.range.start].ends_with(Link::IMAGE_MARKER) {
            // `[` is a single byte
            pos = found.range.start + 1;
            continue;
        }
        pos = found.range.end;
        out.push(found);
    }
    out
}

/// Returns every `![alt](url)` in `text` as `(alt, url)`, left to right.
pub fn extract_images(text: &str) -> Vec<(String, String)> {
    find_images(text)
        .into_iter()
        .map(|b| (b.text, b.url))
        .collect()
}

/// Returns every `[anchor](url)` in `text` as `(anchor, url)`, left to right.
///
/// Image syntax is never reported here.
pub fn extract_links(text: &str) -> Vec<(String, String)> {
    find_links(text)
        .into_iter()
        .map(|b| (b.text, b.url))
        .collect()
}

/// Splits image syntax out of every plain span.
pub fn split_images(spans: Vec<Span>) -> Vec<Span> {
    split_bracketed(spans, SpanKind::Image, find_images)
}

/// Splits link syntax out of every plain span.
pub fn split_links(spans: Vec<Span>) -> Vec<Span> {
    split_bracketed(spans, SpanKind::Link, find_links)
}

fn split_bracketed(
    spans: Vec<Span>,
    kind: SpanKind,
    find: fn(&str) -> Vec<Bracketed>,
) -> Vec<Span> {
    let mut out = Vec::with_capacity(spans.len());

    for span in spans {
        if !span.is_plain() {
            out.push(span);
            continue;
        }

        let found = find(&span.text);
        if found.is_empty() {
            out.push(span);
            continue;
        }

        let mut rest_start = 0;
        for b in found {
            push_plain(&mut out, &span.text[rest_start..b.range.start], &span.url);
            out.push(Span::with_url(b.text, kind, b.url));
            rest_start = b.range.end;
        }
        push_plain(&mut out, &span.text[rest_start..], &span.url);
    }

    out
}

/// Pushes a plain segment carrying the source span's url; empty segments are dropped.
fn push_plain(out: &mut Vec<Span>, text: &str, url: &Option<String>) {
    if !text.is_empty() {
        out.push(Span {
            text: text.to_string(),
            kind: SpanKind::Plain,
            url: url.clone(),
        });
    }
}
