use crate::parsing::error::ParseError;

use super::{
    delimiter::split_delimiter,
    extract::{split_images, split_links},
    kinds::{Bold, InlineCode, Italic},
    types::{Span, SpanKind},
};

/// Tokenizes raw inline markdown into an ordered sequence of [`Span`]s.
///
/// Runs image, link, bold, italic and code passes in that order over a
/// single plain span covering `text`. Empty input yields no spans.
///
/// # Errors
/// [`ParseError::UnmatchedDelimiter`] from any delimiter pass. The first
/// failure aborts tokenizing.
pub fn text_to_spans(text: &str) -> Result<Vec<Span>, ParseError> {
    let spans = vec![Span::plain(text)];
    let spans = split_images(spans);
    let spans = split_links(spans);
    let spans = split_delimiter(spans, Bold::DELIMITER, SpanKind::Bold)?;
    let spans = split_delimiter(spans, Italic::DELIMITER, SpanKind::Italic)?;
    let spans = split_delimiter(spans, InlineCode::DELIMITER, SpanKind::Code)?;
    Ok(spans)
}
