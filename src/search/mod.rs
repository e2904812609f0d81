//! Fuzzy matching shared by item filtering and result highlighting.
//!
//! Both paths go through this module so the decision of whether an item is
//! shown and the marking of which words caused it stay in agreement.

mod distance;
mod highlight;
mod matcher;

pub use distance::{distance, threshold_for};
pub use highlight::{annotate, annotate_opt, annotate_tag, join, Span};
pub use matcher::{matches, matches_opt};

#[cfg(test)]
mod tests;
