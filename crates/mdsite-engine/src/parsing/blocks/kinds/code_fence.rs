/// Fenced code block type with owned fence constant.
///
/// Fenced code is a raw zone: its content is never inline-tokenized.
pub struct CodeFence;

impl CodeFence {
    pub const FENCE: &'static str = "```";
    /// Shortest block that can hold an opening and a closing fence.
    pub const MIN_LEN: usize = 6;

    /// Whether a whole block is fenced code.
    ///
    /// A bare ```` ``` ```` (or any block shorter than two fences) is not.
    pub fn is_fenced(block: &str) -> bool {
        block.len() >= Self::MIN_LEN && block.starts_with(Self::FENCE) && block.ends_with(Self::FENCE)
    }

    /// Extracts the verbatim code between the fence lines.
    ///
    /// Drops the first line (opening fence plus any info string) and the last
    /// line (closing fence). Remaining lines are rejoined and, if there were
    /// any, terminated with a newline.
    pub fn content(block: &str) -> String {
        let lines: Vec<&str> = block.split('\n').collect();
        if lines.len() <= 2 {
            return String::new();
        }

        let mut code = lines[1..lines.len() - 1].join("\n");
        code.push('\n');
        code
    }
}
