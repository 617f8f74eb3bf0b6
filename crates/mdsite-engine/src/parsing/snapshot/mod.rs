//! # Snapshot Testing Support
//!
//! Utilities for testing the parser via snapshot assertions and invariant checks.
//!
//! ## Modules
//!
//! - **`outline`**: Converts an element tree to a stable, indented text outline
//!   for `insta` snapshots and readable assertion failures
//! - **`invariants`**: Runtime checks for tree correctness (root shape, every
//!   parent tagged with children present, link/image leaves carrying their
//!   attributes)

pub mod invariants;
pub mod outline;

pub use invariants::check as invariants;
pub use outline::outline;
