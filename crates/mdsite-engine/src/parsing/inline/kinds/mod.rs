//! # Inline Kinds
//!
//! Inline-specific types that own their syntax.
//!
//! ## Types
//!
//! - **`Bold`**, **`Italic`**, **`InlineCode`**: fixed delimiter strings
//! - **`Image`**, **`Link`**: bracketed `[text](url)` patterns
//!
//! Pass code refers to these constants; it never hardcodes `**` or `![`.

pub mod delimited;
pub mod link;

pub use delimited::{Bold, InlineCode, Italic};
pub use link::{Image, Link};
