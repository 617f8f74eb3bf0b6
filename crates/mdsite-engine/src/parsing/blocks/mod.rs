//! # Block Parsing
//!
//! Three steps take a document to per-block element nodes.
//!
//! ## Parsing Phases
//!
//! 1. **Splitting** (`split`): the document is cut on blank lines into
//!    trimmed, non-empty block strings
//! 2. **Classification** (`classify`): each block gets one [`BlockKind`],
//!    first matching rule wins
//! 3. **Node building** (`builder`): each `(block, kind)` pair becomes an
//!    element node, running inline parsing where the kind allows it
//!
//! ## Modules
//!
//! - **`types`**: `BlockKind` and `Block`
//! - **`kinds`**: block-specific types owning their syntax (Heading, CodeFence,
//!   BlockQuote, UnorderedList, OrderedList, Paragraph)
//! - **`split`**: `markdown_to_blocks`
//! - **`classify`**: `MarkdownBlockClassifier`
//! - **`builder`**: `block_to_node` and the span-to-node conversion
//!
//! ## Key Invariants
//!
//! - Blocks are independent: nothing in one block affects another
//! - Fenced code is a raw zone: no inline parsing inside
//! - Only one level of block quoting is recognised

pub mod builder;
pub mod classify;
pub mod kinds;
pub mod split;
pub mod types;

pub use builder::{block_to_node, span_to_node, text_to_children};
pub use classify::{MarkdownBlockClassifier, block_to_block_kind};
pub use split::markdown_to_blocks;
pub use types::{Block, BlockKind};
