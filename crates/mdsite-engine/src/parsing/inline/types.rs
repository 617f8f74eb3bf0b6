/// The formatting carried by an inline [`Span`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpanKind {
    Plain,
    Bold,
    Italic,
    Code,
    Link,
    Image,
}

/// A run of inline text with one formatting kind.
///
/// `url` is set for links and images (the href or src) and absent otherwise.
/// For an image, `text` holds the alt text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub kind: SpanKind,
    pub url: Option<String>,
}

impl Span {
    pub fn new(text: impl Into<String>, kind: SpanKind) -> Self {
        Self {
            text: text.into(),
            kind,
            url: None,
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, SpanKind::Plain)
    }

    pub fn with_url(text: impl Into<String>, kind: SpanKind, url: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind,
            url: Some(url.into()),
        }
    }

    pub fn is_plain(&self) -> bool {
        self.kind == SpanKind::Plain
    }
}
