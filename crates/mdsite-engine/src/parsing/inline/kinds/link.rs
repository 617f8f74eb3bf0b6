/// An inline image `![alt](url)`.
///
/// The alt text may be empty but never contains `[` or `]`; the url never
/// contains `(` or `)`.
pub struct Image;

impl Image {
    pub const PATTERN: &'static str = r"!\[([^\[\]]*)\]\(([^\(\)]*)\)";
}

/// An inline link `[anchor](url)`.
///
/// Same exclusions as [`Image`]. A match directly preceded by
/// [`Link::IMAGE_MARKER`] is image syntax and is never taken as a link.
pub struct Link;

impl Link {
    pub const PATTERN: &'static str = r"\[([^\[\]]*)\]\(([^\(\)]*)\)";
    pub const IMAGE_MARKER: char = '!';
}
