/// Bold text, delimited by a double asterisk.
pub struct Bold;

impl Bold {
    pub const DELIMITER: &'static str = "**";
}

/// Italic text, delimited by an underscore.
pub struct Italic;

impl Italic {
    pub const DELIMITER: &'static str = "_";
}

/// Inline code, delimited by a single backtick.
///
/// Runs last, so it only sees text that bold and italic left plain.
pub struct InlineCode;

impl InlineCode {
    pub const DELIMITER: &'static str = "`";
}
