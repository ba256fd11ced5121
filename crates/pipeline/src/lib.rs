//! Filter engine for movie queries.
//!
//! This crate provides:
//! - Filter trait and implementations (text substring, minimum vote)
//! - FilterPipeline for composing filters
//! - SearchQuery and `curate`, which validate a query and run it
//!
//! ## Example Usage
//! ```ignore
//! use data_loader::MovieDataset;
//! use pipeline::{curate, CurateOutcome, SearchQuery};
//!
//! let dataset = MovieDataset::bundled()?;
//! let query = SearchQuery::default().with_genre("action").with_avg_vote("8");
//!
//! match curate(&dataset, &query)? {
//!     CurateOutcome::Matches(movies) => println!("{} matches", movies.len()),
//!     CurateOutcome::NoResults => println!("{}", pipeline::NO_RESULTS_MESSAGE),
//! }
//! ```

pub mod traits;
pub mod filters;
pub mod filter_pipeline;
pub mod query;
pub mod curate;

// Re-export main types
pub use traits::Filter;
pub use filter_pipeline::FilterPipeline;
pub use query::{parse_vote_threshold, SearchQuery};
pub use curate::{build_pipeline, curate, CurateError, CurateOutcome, NO_RESULTS_MESSAGE};
