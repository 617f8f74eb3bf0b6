//! # Inline Parsing
//!
//! Turns the text of a single block into an ordered sequence of typed [`Span`]s.
//!
//! ## Passes
//!
//! Tokenizing starts from one plain span covering the whole text and applies
//! five passes in a fixed order. Each pass only re-examines spans that are
//! still plain; everything else passes through untouched.
//!
//! 1. Images `![alt](url)`
//! 2. Links `[anchor](url)` (never directly after `!`)
//! 3. Bold `**`
//! 4. Italic `_`
//! 5. Code `` ` ``
//!
//! Image and link syntax is resolved first, so delimiter characters inside
//! alt or anchor text are never reprocessed as formatting.
//!
//! ## Modules
//!
//! - **`types`**: `Span` and `SpanKind`
//! - **`kinds`**: marker types owning each inline syntax (delimiters, link/image patterns)
//! - **`extract`**: image and link extraction passes
//! - **`delimiter`**: the delimiter splitting pass
//! - **`parser`**: `text_to_spans()` pipeline entry point

pub mod delimiter;
pub mod extract;
pub mod kinds;
pub mod parser;
pub mod types;

pub use delimiter::split_delimiter;
pub use extract::{extract_images, extract_links, split_images, split_links};
pub use parser::text_to_spans;
pub use types::{Span, SpanKind};
