use crate::parsing::error::ParseError;

use super::types::{Span, SpanKind};

/// Splits every plain span on `delimiter`, marking the enclosed parts as `kind`.
///
/// The parts of a split alternate outside/inside: even-indexed parts stay
/// plain, odd-indexed parts become `kind`. Empty parts are dropped and every
/// resulting span inherits the source span's url. Non-plain spans pass
/// through unchanged.
///
/// # Errors
/// [`ParseError::UnmatchedDelimiter`] when a plain span contains an odd
/// number of delimiters.
pub fn split_delimiter(
    spans: Vec<Span>,
    delimiter: &str,
    kind: SpanKind,
) -> Result<Vec<Span>, ParseError> {
    let mut out = Vec::with_capacity(spans.len());

    for span in spans {
        if !span.is_plain() {
            out.push(span);
            continue;
        }

        let parts: Vec<&str> = span.text.split(delimiter).collect();
        if parts.len() % 2 == 0 {
            return Err(ParseError::UnmatchedDelimiter {
                delimiter: delimiter.to_string(),
                text: span.text.clone(),
            });
        }

        for (i, part) in parts.into_iter().enumerate() {
            if part.is_empty() {
                continue;
            }
            out.push(Span {
                text: part.to_string(),
                kind: if i % 2 == 0 { SpanKind::Plain } else { kind },
                url: span.url.clone(),
            });
        }
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::inline::kinds::{Bold, InlineCode, Italic};
    use pretty_assertions::assert_eq;

    #[test]
    fn split_bold() {
        let spans = split_delimiter(
            vec![Span::plain("This is text with a **bolded phrase** in the middle")],
            Bold::DELIMITER,
            SpanKind::Bold,
        )
        .unwrap();
        assert_eq!(
            spans,
            vec![
                Span::plain("This is text with a "),
                Span::new("bolded phrase", SpanKind::Bold),
                Span::plain(" in the middle"),
            ]
        );
    }

    #[test]
    fn split_code_multiple_pairs() {
        let spans = split_delimiter(
            vec![Span::plain("`a` and `b`")],
            InlineCode::DELIMITER,
            SpanKind::Code,
        )
        .unwrap();
        assert_eq!(
            spans,
            vec![
                Span::new("a", SpanKind::Code),
                Span::plain(" and "),
                Span::new("b", SpanKind::Code),
            ]
        );
    }

    #[test]
    fn delimiter_at_edges_drops_empty_parts() {
        let spans = split_delimiter(
            vec![Span::plain("_italic_ text")],
            Italic::DELIMITER,
            SpanKind::Italic,
        )
        .unwrap();
        assert_eq!(
            spans,
            vec![Span::new("italic", SpanKind::Italic), Span::plain(" text")]
        );
    }

    #[test]
    fn empty_pair_produces_nothing() {
        let spans =
            split_delimiter(vec![Span::plain("a****b")], Bold::DELIMITER, SpanKind::Bold).unwrap();
        assert_eq!(spans, vec![Span::plain("a"), Span::plain("b")]);
    }

    #[test]
    fn no_delimiter_keeps_span() {
        let spans =
            split_delimiter(vec![Span::plain("plain")], Bold::DELIMITER, SpanKind::Bold).unwrap();
        assert_eq!(spans, vec![Span::plain("plain")]);
    }

    #[test]
    fn unmatched_delimiter_fails() {
        let err = split_delimiter(
            vec![Span::plain("This is **unclosed")],
            Bold::DELIMITER,
            SpanKind::Bold,
        )
        .unwrap_err();
        assert_eq!(
            err,
            ParseError::UnmatchedDelimiter {
                delimiter: "**".into(),
                text: "This is **unclosed".into(),
            }
        );
        assert_eq!(
            err.to_string(),
            "Unmatched delimiter '**' in text: This is **unclosed"
        );
    }

    #[test]
    fn three_delimiters_fail() {
        let result = split_delimiter(
            vec![Span::plain("`a` b `c")],
            InlineCode::DELIMITER,
            SpanKind::Code,
        );
        assert!(matches!(result, Err(ParseError::UnmatchedDelimiter { .. })));
    }

    #[test]
    fn non_plain_spans_are_not_checked() {
        let link = Span::with_url("odd ** count", SpanKind::Link, "u");
        let spans = split_delimiter(vec![link.clone()], Bold::DELIMITER, SpanKind::Bold).unwrap();
        assert_eq!(spans, vec![link]);
    }

    #[test]
    fn parts_keep_source_url() {
        let spans = split_delimiter(
            vec![Span::with_url("a _b_", SpanKind::Plain, "u")],
            Italic::DELIMITER,
            SpanKind::Italic,
        )
        .unwrap();
        assert!(spans.iter().all(|s| s.url.as_deref() == Some("u")));
    }

    #[test]
    fn chained_passes() {
        let spans = split_delimiter(
            vec![Span::plain("**bold** and _italic_")],
            Bold::DELIMITER,
            SpanKind::Bold,
        )
        .and_then(|s| split_delimiter(s, Italic::DELIMITER, SpanKind::Italic))
        .unwrap();
        assert_eq!(
            spans,
            vec![
                Span::new("bold", SpanKind::Bold),
                Span::plain(" and "),
                Span::new("italic", SpanKind::Italic),
            ]
        );
    }
}
