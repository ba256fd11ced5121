//! Filter implementations for the search pipeline.
//!
//! This module contains the concrete filters that can be composed into
//! a FilterPipeline.

pub mod minimum_vote;
pub mod text_match;

// Re-export for convenience
pub use minimum_vote::{filter_by_vote, MinimumVoteFilter};
pub use text_match::{filter_by_field, FieldMatchFilter, TextField};
